//! Item statistics aggregation

use serde::{Deserialize, Serialize};

use crate::items::{ItemRecord, ItemScanner};
use crate::reference::QualityTier;

/// Item counts for one character, grouped by quality tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Every counted item, including ones with an unrecognized quality code
    #[serde(rename = "total_items")]
    pub total: u32,
    pub low_quality: u32,
    pub normal: u32,
    pub high_quality: u32,
    pub magic: u32,
    pub set: u32,
    pub rare: u32,
    pub unique: u32,
    pub crafted: u32,
    /// Stone of Jordan rings, also counted under `unique`
    #[serde(rename = "soj_count")]
    pub named_ring_count: u32,
}

impl Stats {
    /// Scan a save buffer's item list and tally it
    pub fn from_save(buf: &[u8]) -> Self {
        ItemScanner::new(buf).collect()
    }

    /// Count a single item record
    pub fn record(&mut self, item: &ItemRecord<'_>) {
        self.total += 1;

        if let Some(tier) = item.quality_tier() {
            *self.tier_mut(tier) += 1;
        }

        if item.is_named_ring() {
            self.named_ring_count += 1;
        }
    }

    /// Count for a single quality tier
    pub fn tier(&self, tier: QualityTier) -> u32 {
        match tier {
            QualityTier::LowQuality => self.low_quality,
            QualityTier::Normal => self.normal,
            QualityTier::HighQuality => self.high_quality,
            QualityTier::Magic => self.magic,
            QualityTier::Set => self.set,
            QualityTier::Rare => self.rare,
            QualityTier::Unique => self.unique,
            QualityTier::Crafted => self.crafted,
        }
    }

    fn tier_mut(&mut self, tier: QualityTier) -> &mut u32 {
        match tier {
            QualityTier::LowQuality => &mut self.low_quality,
            QualityTier::Normal => &mut self.normal,
            QualityTier::HighQuality => &mut self.high_quality,
            QualityTier::Magic => &mut self.magic,
            QualityTier::Set => &mut self.set,
            QualityTier::Rare => &mut self.rare,
            QualityTier::Unique => &mut self.unique,
            QualityTier::Crafted => &mut self.crafted,
        }
    }
}

impl<'a> Extend<ItemRecord<'a>> for Stats {
    fn extend<I: IntoIterator<Item = ItemRecord<'a>>>(&mut self, iter: I) {
        for item in iter {
            self.record(&item);
        }
    }
}

impl<'a> FromIterator<ItemRecord<'a>> for Stats {
    fn from_iter<I: IntoIterator<Item = ItemRecord<'a>>>(iter: I) -> Self {
        let mut stats = Stats::default();
        stats.extend(iter);
        stats
    }
}

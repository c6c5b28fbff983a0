//! Reference data for Diablo II characters and items
//!
//! Hardcoded lookup tables for item quality tiers and character classes.
//! This data is used for classification and display purposes.

// ============================================================================
// Item quality
// ============================================================================

/// Item quality tier, as stored in the 4-bit quality field of an item record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QualityTier {
    LowQuality = 1,
    Normal = 2,
    HighQuality = 3,
    Magic = 4,
    Set = 5,
    Rare = 6,
    Unique = 7,
    Crafted = 8,
}

impl QualityTier {
    /// All quality tiers in code order
    pub const ALL: [QualityTier; 8] = [
        QualityTier::LowQuality,
        QualityTier::Normal,
        QualityTier::HighQuality,
        QualityTier::Magic,
        QualityTier::Set,
        QualityTier::Rare,
        QualityTier::Unique,
        QualityTier::Crafted,
    ];

    /// Convert a raw quality code to a tier. Codes outside 1-8 have no tier.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(QualityTier::LowQuality),
            2 => Some(QualityTier::Normal),
            3 => Some(QualityTier::HighQuality),
            4 => Some(QualityTier::Magic),
            5 => Some(QualityTier::Set),
            6 => Some(QualityTier::Rare),
            7 => Some(QualityTier::Unique),
            8 => Some(QualityTier::Crafted),
            _ => None,
        }
    }

    /// Raw quality code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Get quality tier name
    pub fn name(&self) -> &'static str {
        match self {
            QualityTier::LowQuality => "Low Quality",
            QualityTier::Normal => "Normal",
            QualityTier::HighQuality => "High Quality",
            QualityTier::Magic => "Magic",
            QualityTier::Set => "Set",
            QualityTier::Rare => "Rare",
            QualityTier::Unique => "Unique",
            QualityTier::Crafted => "Crafted",
        }
    }
}

/// Unique catalog id of the Stone of Jordan ring
pub const NAMED_RING_UNIQUE_ID: u16 = 122;

// ============================================================================
// Character classes
// ============================================================================

/// Class names indexed by class id
pub const CLASS_NAMES: &[&str] = &[
    "Amazon",
    "Sorceress",
    "Necromancer",
    "Paladin",
    "Barbarian",
    "Druid",
    "Assassin",
];

/// Name reported for class ids outside [`CLASS_NAMES`]
pub const UNKNOWN_CLASS: &str = "Unknown";

/// Get class name by class id
pub fn class_name(class_id: u8) -> &'static str {
    CLASS_NAMES
        .get(usize::from(class_id))
        .copied()
        .unwrap_or(UNKNOWN_CLASS)
}

//! Per-character report combining header fields and item statistics

use serde::Serialize;
use tracing::debug;

use crate::charinfo::CharInfo;
use crate::header::{CharacterHeader, HeaderError};
use crate::items::ItemScanner;
use crate::stats::Stats;

/// Character identity block of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterInfo {
    pub name: String,
    pub account_name: String,
    pub level: u8,
    pub class: &'static str,
}

/// Everything exported for one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterReport {
    pub character_info: CharacterInfo,
    pub item_stats: Stats,
    #[serde(skip)]
    pub header: CharacterHeader,
}

impl CharacterReport {
    /// Build a report from a save buffer.
    ///
    /// Names come from the charinfo record when one is available, otherwise
    /// from the caller (usually the directory layout).
    pub fn build(
        save: &[u8],
        charinfo: Option<&CharInfo>,
        character_name: &str,
        account_name: &str,
    ) -> Result<Self, HeaderError> {
        let header = CharacterHeader::read(save)?;

        let mut scanner = ItemScanner::new(save);
        let item_stats: Stats = scanner.by_ref().collect();
        if let Some(offset) = scanner.truncated_at() {
            debug!(
                character = character_name,
                offset, "item list ran past end of save"
            );
        }

        let (name, account) = match charinfo {
            Some(info) => (info.character_name.clone(), info.account_name.clone()),
            None => (character_name.to_string(), account_name.to_string()),
        };

        Ok(Self {
            character_info: CharacterInfo {
                name,
                account_name: account,
                level: header.level,
                class: header.class_name(),
            },
            item_stats,
            header,
        })
    }
}

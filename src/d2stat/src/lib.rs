//! # d2stat
//!
//! Diablo II character save decoder - item stream scanning and statistics.
//!
//! This library provides functionality to:
//! - Locate the item list inside a character save and decode item records
//! - Count items per quality tier, including Stone of Jordan rings
//! - Read level, class and dead/alive status from the save header
//! - Parse PvPGN charinfo metadata for authoritative names
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let save = fs::read("/usr/local/pvpgn/var/pvpgn/charsave/tesla")?;
//!
//! let report = d2stat::CharacterReport::build(&save, None, "tesla", "zgan")?;
//! println!("Level {} {}", report.character_info.level, report.character_info.class);
//! println!("Uniques: {}", report.item_stats.unique);
//! println!("SoJs: {}", report.item_stats.named_ring_count);
//!
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod charinfo;
pub mod header;
pub mod items;
pub mod reference;
pub mod report;
pub mod stats;

// Re-export commonly used items
#[doc(inline)]
pub use charinfo::{CharInfo, CharInfoError};
#[doc(inline)]
pub use header::{CharacterHeader, HeaderError};
#[doc(inline)]
pub use items::{marker_offsets, ItemError, ItemRecord, ItemScanner};
#[doc(inline)]
pub use reference::{class_name, QualityTier, CLASS_NAMES, NAMED_RING_UNIQUE_ID};
#[doc(inline)]
pub use report::{CharacterInfo, CharacterReport};
#[doc(inline)]
pub use stats::Stats;

//! File system utilities for the PvPGN directory layout

use anyhow::{bail, Result};
use std::path::Path;
use tracing::warn;

/// A character discovered under the charinfo root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterEntry {
    pub account: String,
    pub character: String,
}

/// Walk `<charinfo_root>/<account>/<character>` and list every character.
///
/// Entries are returned sorted by account, then character name. Unreadable
/// account directories and non-UTF-8 names are skipped with a warning.
pub fn discover_characters(charinfo_root: &Path) -> Result<Vec<CharacterEntry>> {
    if !charinfo_root.is_dir() {
        bail!(
            "Could not open charinfo directory {}",
            charinfo_root.display()
        );
    }

    let mut characters = Vec::new();

    for entry in walkdir::WalkDir::new(charinfo_root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let account = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str());
        let character = path.file_name().and_then(|n| n.to_str());

        match (account, character) {
            (Some(account), Some(character)) => characters.push(CharacterEntry {
                account: account.to_string(),
                character: character.to_string(),
            }),
            _ => warn!("Skipping non UTF-8 path {}", path.display()),
        }
    }

    Ok(characters)
}

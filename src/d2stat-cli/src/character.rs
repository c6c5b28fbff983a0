//! Loading a character's files into a report

use anyhow::{bail, Context, Result};
use d2stat::{CharInfo, CharacterReport};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::SaveDirs;

/// Read a character's save (required) and charinfo (optional) and build its report
pub fn load_report(dirs: &SaveDirs, character: &str, account: &str) -> Result<CharacterReport> {
    let save_path = dirs.save_path(character);
    let save = fs::read(&save_path)
        .with_context(|| format!("Failed to read save file {}", save_path.display()))?;
    if save.is_empty() {
        bail!("Save file {} is empty", save_path.display());
    }

    let charinfo = read_charinfo(&dirs.charinfo_path(account, character));

    CharacterReport::build(&save, charinfo.as_ref(), character, account)
        .with_context(|| format!("Failed to decode {}", save_path.display()))
}

/// Metadata is optional; any failure falls back to directory-derived names
fn read_charinfo(path: &Path) -> Option<CharInfo> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("No charinfo at {}: {}", path.display(), err);
            return None;
        }
    };

    match CharInfo::parse(&bytes) {
        Ok(info) => Some(info),
        Err(err) => {
            warn!("Ignoring charinfo {}: {}", path.display(), err);
            None
        }
    }
}

/// Fixture builders shared by command tests
#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::Path;

    use crate::config::SaveDirs;

    /// Save with a header and one item list: a Stone of Jordan and a magic item
    pub fn save_bytes(class_id: u8, level: u8) -> Vec<u8> {
        let mut buf = vec![0u8; 0x30];
        buf[0x28] = class_id;
        buf[0x2B] = level;

        buf.extend_from_slice(b"JM\x02\x00");
        buf.extend(record(7, true, 122));
        buf.extend(record(4, false, 0));
        buf.extend_from_slice(b"JM\x00\x00");
        buf
    }

    /// 22-byte item record with the given quality, ring flag and unique id
    fn record(quality: u8, is_ring: bool, unique_id: u16) -> Vec<u8> {
        let mut bytes = vec![0u8; 22];
        bytes[0] = b'J';
        bytes[1] = b'M';
        bytes[2] = 0x10;

        let mut put = |bit: usize, value: u64, width: usize| {
            for i in 0..width {
                if (value >> i) & 1 == 1 {
                    let pos = bit + i;
                    bytes[pos / 8] |= 1 << (pos % 8);
                }
            }
        };
        put(150, u64::from(quality), 4);
        put(154, u64::from(is_ring), 1);
        put(159, u64::from(unique_id), 12);
        bytes
    }

    /// 112-byte charinfo record holding just the names
    pub fn charinfo_bytes(character: &str, account: &str) -> Vec<u8> {
        let mut buf = vec![0u8; 112];
        buf[48..48 + character.len()].copy_from_slice(character.as_bytes());
        buf[64..64 + account.len()].copy_from_slice(account.as_bytes());
        buf
    }

    /// Lay out a PvPGN var directory under `root`
    pub fn pvpgn_tree(root: &Path) -> SaveDirs {
        let dirs = SaveDirs {
            charinfo: root.join("charinfo"),
            charsave: root.join("charsave"),
        };
        fs::create_dir_all(&dirs.charinfo).unwrap();
        fs::create_dir_all(&dirs.charsave).unwrap();
        dirs
    }

    pub fn add_character(
        dirs: &SaveDirs,
        account: &str,
        character: &str,
        save: Option<Vec<u8>>,
        charinfo: Option<Vec<u8>>,
    ) {
        let account_dir = dirs.charinfo.join(account);
        fs::create_dir_all(&account_dir).unwrap();
        fs::write(account_dir.join(character), charinfo.unwrap_or_default()).unwrap();
        if let Some(save) = save {
            fs::write(dirs.save_path(character), save).unwrap();
        }
    }
}

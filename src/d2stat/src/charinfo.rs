//! PvPGN character metadata ("charinfo") files.
//!
//! The server keeps a small fixed-size record per character next to the save
//! file. It holds the authoritative character, account and realm names, which
//! are preferred over names derived from directory paths.
//!
//! Layout (little-endian):
//!
//! | Offset | Field                      |
//! |--------|----------------------------|
//! | 0      | magic (u32)                |
//! | 4      | version (u32)              |
//! | 8      | create time (u32)          |
//! | 12     | last time (u32)            |
//! | 16     | checksum (u32)             |
//! | 20     | total play time (u32)      |
//! | 24     | reserved (6 x u32)         |
//! | 48     | character name (16 bytes)  |
//! | 64     | account name (16 bytes)    |
//! | 80     | realm name (32 bytes)      |

use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

pub const NAME_LEN: usize = 16;
pub const REALM_LEN: usize = 32;

const CHARNAME_OFFSET: usize = 48;
const ACCOUNT_OFFSET: usize = CHARNAME_OFFSET + NAME_LEN;
const REALM_OFFSET: usize = ACCOUNT_OFFSET + NAME_LEN;

/// Size of the metadata record
pub const CHARINFO_LEN: usize = REALM_OFFSET + REALM_LEN;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharInfoError {
    #[error("Charinfo record truncated: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
}

/// Parsed charinfo record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharInfo {
    pub magic: u32,
    pub version: u32,
    pub create_time: u32,
    pub last_time: u32,
    pub checksum: u32,
    pub total_play_time: u32,
    pub character_name: String,
    pub account_name: String,
    pub realm_name: String,
}

impl CharInfo {
    pub fn parse(buf: &[u8]) -> Result<Self, CharInfoError> {
        if buf.len() < CHARINFO_LEN {
            return Err(CharInfoError::Truncated {
                needed: CHARINFO_LEN,
                actual: buf.len(),
            });
        }

        let word = |index: usize| LittleEndian::read_u32(&buf[index * 4..index * 4 + 4]);

        Ok(Self {
            magic: word(0),
            version: word(1),
            create_time: word(2),
            last_time: word(3),
            checksum: word(4),
            total_play_time: word(5),
            character_name: fixed_str(&buf[CHARNAME_OFFSET..ACCOUNT_OFFSET]),
            account_name: fixed_str(&buf[ACCOUNT_OFFSET..REALM_OFFSET]),
            realm_name: fixed_str(&buf[REALM_OFFSET..CHARINFO_LEN]),
        })
    }
}

/// Decode a NUL-padded fixed-width string field
fn fixed_str(field: &[u8]) -> String {
    let end = field.iter().position(|b| *b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Test fixture writer for charinfo records
#[cfg(test)]
pub(crate) fn encode(character: &str, account: &str, realm: &str) -> Vec<u8> {
    let mut buf = vec![0u8; CHARINFO_LEN];
    LittleEndian::write_u32(&mut buf[0..4], 0x1234_5678);
    LittleEndian::write_u32(&mut buf[4..8], 0x0100_0000);
    LittleEndian::write_u32(&mut buf[20..24], 3600);

    let mut put = |offset: usize, len: usize, value: &str| {
        let bytes = value.as_bytes();
        let n = bytes.len().min(len);
        buf[offset..offset + n].copy_from_slice(&bytes[..n]);
    };
    put(CHARNAME_OFFSET, NAME_LEN, character);
    put(ACCOUNT_OFFSET, NAME_LEN, account);
    put(REALM_OFFSET, REALM_LEN, realm);
    buf
}

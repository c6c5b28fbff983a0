//! Fixed-offset character header fields

use thiserror::Error;

use crate::reference::class_name;

/// Status flags byte; bit 3 marks a dead hardcore character
pub const STATUS_OFFSET: usize = 0x24;
pub const CLASS_OFFSET: usize = 0x28;
pub const LEVEL_OFFSET: usize = 0x2B;

const DEAD_FLAG: u8 = 0x8;

/// Minimum save length for the header to be readable
pub const HEADER_LEN: usize = LEVEL_OFFSET + 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Save header truncated: need {needed} bytes, got {actual}")]
    TruncatedHeader { needed: usize, actual: usize },
}

/// Character level, class and status read from a save buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterHeader {
    pub level: u8,
    pub class_id: u8,
    pub dead: bool,
}

impl CharacterHeader {
    pub fn read(buf: &[u8]) -> Result<Self, HeaderError> {
        if buf.len() < HEADER_LEN {
            return Err(HeaderError::TruncatedHeader {
                needed: HEADER_LEN,
                actual: buf.len(),
            });
        }

        Ok(Self {
            level: buf[LEVEL_OFFSET],
            class_id: buf[CLASS_OFFSET],
            dead: buf[STATUS_OFFSET] & DEAD_FLAG != 0,
        })
    }

    /// Class name, or "Unknown" for ids outside the class table
    pub fn class_name(&self) -> &'static str {
        class_name(self.class_id)
    }

    pub fn status(&self) -> &'static str {
        if self.dead {
            "Dead"
        } else {
            "Alive"
        }
    }
}

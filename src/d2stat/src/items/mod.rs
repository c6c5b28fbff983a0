//! Item record decoding for Diablo II character saves
//!
//! Items are stored as packed bit-field records, each introduced by the
//! two-byte `JM` marker. Only the fields needed for statistics are decoded.
//!
//! Record layout (bit offsets from the start of the marker):
//!
//! | Bits    | Field                              |
//! |---------|------------------------------------|
//! | 0-36    | marker and flags (ignored)         |
//! | 37      | simple                             |
//! | 38-75   | ignored                            |
//! | 76-107  | four 8-bit item type codes         |
//! | 108-149 | ignored                            |
//! | 150-153 | quality                            |
//! | 154     | ring flag                          |
//! | 155-157 | ring picture                       |
//! | 158     | class specific                     |
//! | 159-170 | unique catalog id                  |

pub(crate) mod bitstream;
mod scanner;

pub use scanner::{marker_offsets, ItemScanner};

use crate::reference::{QualityTier, NAMED_RING_UNIQUE_ID};
use bitstream::BitReader;

/// Two-byte marker that introduces the item list and every item record
pub const ITEM_MARKER: [u8; 2] = *b"JM";

/// Number of bits covered by the decoded record fields
pub const RECORD_BITS: usize = 171;

/// Bytes that must be present past a record offset for it to be decoded
pub const RECORD_LEN: usize = RECORD_BITS.div_ceil(8);

/// Errors that can occur during item decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("Item record at offset {offset:#x} truncated: need {needed} bytes, {available} available")]
    TruncatedRecord {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

/// A decoded item record, borrowing its bytes from the save buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRecord<'a> {
    /// Byte offset of the record's marker in the save buffer
    pub offset: usize,
    /// Item has no extended properties
    pub simple: bool,
    /// Raw 4-bit quality code
    pub quality: u8,
    pub is_ring: bool,
    pub ring_pic: u8,
    pub class_specific: bool,
    /// Unique catalog id (12 bits), meaningful only for unique items
    pub unique_id: u16,
    raw: &'a [u8],
}

impl<'a> ItemRecord<'a> {
    /// Decode the record whose marker starts at `offset`
    pub fn decode(buf: &'a [u8], offset: usize) -> Result<Self, ItemError> {
        let available = buf.len().saturating_sub(offset);
        let truncated = ItemError::TruncatedRecord {
            offset,
            needed: RECORD_LEN,
            available,
        };

        if available < RECORD_LEN {
            return Err(truncated);
        }

        let raw = &buf[offset..offset + RECORD_LEN];
        Self::decode_fields(raw, offset).ok_or(truncated)
    }

    fn decode_fields(raw: &'a [u8], offset: usize) -> Option<Self> {
        let mut reader = BitReader::new(raw);

        reader.skip(32 + 5)?;
        let simple = reader.read_flag()?;
        reader.skip(32 + 6 + 32)?; // flags + type codes
        reader.skip(32 + 10)?;
        let quality = reader.read_bits(4)? as u8;
        let is_ring = reader.read_flag()?;
        let ring_pic = reader.read_bits(3)? as u8;
        let class_specific = reader.read_flag()?;
        let unique_id = reader.read_bits(12)? as u16;

        Some(Self {
            offset,
            simple,
            quality,
            is_ring,
            ring_pic,
            class_specific,
            unique_id,
            raw,
        })
    }

    /// The record bytes this view was decoded from
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    /// Quality tier, if the quality code is recognized
    pub fn quality_tier(&self) -> Option<QualityTier> {
        QualityTier::from_code(self.quality)
    }

    /// Four item type code bytes (e.g. `b"rin "`)
    pub fn type_code(&self) -> [u8; 4] {
        let mut code = [0u8; 4];
        let mut reader = BitReader::new(self.raw);
        if reader.skip(76).is_some() {
            for byte in code.iter_mut() {
                *byte = reader.read_bits(8).unwrap_or(0) as u8;
            }
        }
        code
    }

    /// Unique, non class-specific ring with the Stone of Jordan catalog id
    pub fn is_named_ring(&self) -> bool {
        self.quality_tier() == Some(QualityTier::Unique)
            && self.is_ring
            && !self.class_specific
            && self.unique_id == NAMED_RING_UNIQUE_ID
    }
}

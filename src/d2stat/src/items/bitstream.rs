//! Bitstream reader and writer for packed item records.
//!
//! Item records are laid out as a packed bit-field struct on a little-endian
//! target: bit `n` of a record lives in bit `n % 8` of byte `n / 8`, and
//! multi-bit fields are assembled least-significant bit first.

/// Bitstream reader over a borrowed record
pub(crate) struct BitReader<'a> {
    bytes: &'a [u8],
    pub(crate) bit_offset: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            bit_offset: 0,
        }
    }

    /// Read N bits as a u64 value (LSB-first)
    /// The first bit read becomes bit 0 of the result
    pub fn read_bits(&mut self, count: usize) -> Option<u64> {
        if count > 64 || count > self.remaining_bits() {
            return None;
        }

        let mut result = 0u64;
        for shift in 0..count {
            let byte_idx = self.bit_offset / 8;
            let bit_idx = self.bit_offset % 8; // Read from LSB (bit 0) up to MSB (bit 7)

            let bit = (self.bytes[byte_idx] >> bit_idx) & 1;
            result |= u64::from(bit) << shift;
            self.bit_offset += 1;
        }

        Some(result)
    }

    /// Read a single bit as a flag
    pub fn read_flag(&mut self) -> Option<bool> {
        self.read_bits(1).map(|bit| bit == 1)
    }

    /// Advance past bits we don't care about
    pub fn skip(&mut self, count: usize) -> Option<()> {
        if count > self.remaining_bits() {
            return None;
        }
        self.bit_offset += count;
        Some(())
    }

    /// Returns the number of bits remaining in the stream
    pub fn remaining_bits(&self) -> usize {
        let total_bits = self.bytes.len() * 8;
        total_bits.saturating_sub(self.bit_offset)
    }
}

/// Bitstream writer producing the same packing the reader consumes
#[cfg(test)]
pub(crate) struct BitWriter {
    bytes: Vec<u8>,
    bit_offset: usize,
}

#[cfg(test)]
impl BitWriter {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_offset: 0,
        }
    }

    /// Write N bits from a u64 value (LSB-first)
    pub fn write_bits(&mut self, value: u64, count: usize) {
        for i in 0..count {
            let bit = ((value >> i) & 1) as u8;
            let byte_idx = self.bit_offset / 8;
            let bit_idx = self.bit_offset % 8;

            while byte_idx >= self.bytes.len() {
                self.bytes.push(0);
            }

            if bit == 1 {
                self.bytes[byte_idx] |= 1 << bit_idx;
            }
            self.bit_offset += 1;
        }
    }

    /// Get the final bytes (padded to byte boundary)
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_roundtrip() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b1010, 4);
        writer.write_bits(0b11111111, 8);
        writer.write_bits(0b101, 3);
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bits(4), Some(0b1010));
        assert_eq!(reader.read_bits(8), Some(0b11111111));
        assert_eq!(reader.read_bits(3), Some(0b101));
    }

    #[test]
    fn test_lsb_first_packing() {
        // 0x4A = 0b0100_1010: low nibble first
        let bytes = [0x4A];
        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bits(4), Some(0xA));
        assert_eq!(reader.read_bits(4), Some(0x4));
    }

    #[test]
    fn test_field_spanning_bytes() {
        // 12-bit field starting at bit 7
        let mut writer = BitWriter::new();
        writer.write_bits(0, 7);
        writer.write_bits(0xABC, 12);
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 3);

        let mut reader = BitReader::new(&bytes);
        reader.skip(7).unwrap();
        assert_eq!(reader.read_bits(12), Some(0xABC));
    }

    #[test]
    fn test_read_past_end() {
        let bytes = [0xFF];
        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bits(9), None);
        // A failed read does not consume anything
        assert_eq!(reader.remaining_bits(), 8);
        assert_eq!(reader.read_flag(), Some(true));
        assert!(reader.skip(8).is_none());
    }

    #[test]
    fn test_remaining_bits() {
        let bytes = [0xFF, 0xFF];
        let reader = BitReader::new(&bytes);
        assert_eq!(reader.remaining_bits(), 16);
    }
}

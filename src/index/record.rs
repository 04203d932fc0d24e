use std::fmt;

use serde::Serialize;

use crate::types::{Offset, Position, RECORD_SIZE};

/// A single 8-byte entry of an index file.
///
/// Both halves are little-endian `u32`. What they mean (id -> id, id -> index,
/// index -> size) depends on the file that produced them, the reader never
/// interprets them.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexRecord {
    pub first: u32,
    pub last: u32,
}

impl IndexRecord {
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Self {
        let [a, b, c, d, e, f, g, h] = *bytes;
        Self::new(
            u32::from_le_bytes([a, b, c, d]),
            u32::from_le_bytes([e, f, g, h]),
        )
    }

    #[cfg(test)]
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut combined_bytes = [0u8; RECORD_SIZE];
        combined_bytes[..4].copy_from_slice(&self.first.to_le_bytes());
        combined_bytes[4..].copy_from_slice(&self.last.to_le_bytes());
        combined_bytes
    }

    pub fn index_offset(position: Position) -> Offset {
        position * RECORD_SIZE as Offset
    }
}

impl fmt::Display for IndexRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_should_decode_little_endian_halves() {
        let bytes = [0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00];

        let record = IndexRecord::from_bytes(&bytes);

        assert_eq!(record, IndexRecord::new(1, 2));
    }

    #[test]
    fn from_bytes_should_keep_full_u32_range() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00];

        let record = IndexRecord::from_bytes(&bytes);

        assert_eq!(record.first, u32::MAX);
        assert_eq!(record.last, 0);
    }

    #[test]
    fn to_bytes_should_be_read_back_by_from_bytes() {
        let records = [
            IndexRecord::new(0, 0),
            IndexRecord::new(42, 7),
            IndexRecord::new(0x0102_0304, 0xA0B0_C0D0),
        ];

        for record in records {
            assert_eq!(IndexRecord::from_bytes(&record.to_bytes()), record);
        }
    }

    #[test]
    fn to_bytes_should_place_first_before_last() {
        let bytes = IndexRecord::new(0x0403_0201, 0x0807_0605).to_bytes();

        assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn index_offset_should_be_multiple_of_record_size() {
        assert_eq!(IndexRecord::index_offset(0), 0);
        assert_eq!(IndexRecord::index_offset(3), 24);
    }

    #[test]
    fn display_should_render_decimal_pair() {
        assert_eq!(IndexRecord::new(4294967295, 0).to_string(), "4294967295 : 0");
    }
}

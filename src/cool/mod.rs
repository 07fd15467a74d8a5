//! Cool image format decoder and encoder (internal).
//!
//! Layout, little-endian throughout:
//!
//! ```text
//! 0      'c'
//! 1      'o'
//! 2..6   i32 width
//! 6..10  i32 height
//! 10..   |height| rows of 8-bit palette indices, padded to 4 bytes
//! ```
//!
//! A positive height stores rows bottom-up, a negative height top-down.
//! The encoder always writes bottom-up.

pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod rows;

use alloc::vec::Vec;

use crate::error::CoolError;

pub(crate) const MAGIC: [u8; 2] = *b"co";
pub(crate) const HEADER_LEN: usize = 10;

/// The 10-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CoolHeader {
    pub width: i32,
    pub height: i32,
}

impl CoolHeader {
    pub fn parse(data: &[u8]) -> Result<Self, CoolError> {
        // Magic is checked before length so any foreign two bytes are
        // reported as such.
        if let [a, b, ..] = *data {
            if [a, b] != MAGIC {
                return Err(CoolError::InvalidMagic { found: [a, b] });
            }
        }
        let header: &[u8; HEADER_LEN] = data
            .get(..HEADER_LEN)
            .and_then(|h| h.try_into().ok())
            .ok_or(CoolError::InsufficientData {
                needed: HEADER_LEN,
                actual: data.len(),
            })?;
        let width = i32::from_le_bytes([header[2], header[3], header[4], header[5]]);
        let height = i32::from_le_bytes([header[6], header[7], header[8], header[9]]);
        Ok(Self { width, height })
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
    }

    /// Plane width. A negative declared width only contributes its magnitude.
    pub fn plane_width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    pub fn plane_height(&self) -> u32 {
        self.height.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scenario_header() {
        let data = [0x63, 0x6F, 0x02, 0, 0, 0, 0x01, 0, 0, 0];
        let header = CoolHeader::parse(&data).unwrap();
        assert_eq!(header, CoolHeader { width: 2, height: 1 });
    }

    #[test]
    fn parse_negative_fields() {
        let mut data = Vec::new();
        CoolHeader {
            width: -5,
            height: -7,
        }
        .write(&mut data);
        assert_eq!(data.len(), HEADER_LEN);
        let header = CoolHeader::parse(&data).unwrap();
        assert_eq!(header.width, -5);
        assert_eq!(header.plane_width(), 5);
        assert_eq!(header.plane_height(), 7);
    }

    #[test]
    fn bad_magic_wins_over_short_input() {
        assert!(matches!(
            CoolHeader::parse(b"BM"),
            Err(CoolError::InvalidMagic { found: [b'B', b'M'] })
        ));
    }

    #[test]
    fn short_header() {
        assert!(matches!(
            CoolHeader::parse(b"co\x01\x00"),
            Err(CoolError::InsufficientData { needed: 10, actual: 4 })
        ));
        assert!(matches!(
            CoolHeader::parse(b""),
            Err(CoolError::InsufficientData { needed: 10, actual: 0 })
        ));
    }
}

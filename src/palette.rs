//! Palette tables for the 8-bit indexed layout.

use alloc::vec::Vec;

use rgb::RGB8;

/// A 256-entry RGB palette that gives meaning to indexed pixels.
///
/// The cool format stores no palette. The table is configuration held by
/// whoever interprets the indices, usually [`Palette::rgb332`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: [RGB8; 256],
}

impl Default for Palette {
    fn default() -> Self {
        Self::rgb332()
    }
}

impl Palette {
    /// The systematic 3-3-2 palette: bits 7..5 red, 4..2 green, 1..0 blue.
    pub fn rgb332() -> Self {
        let mut entries = [RGB8::default(); 256];
        for (i, entry) in entries.iter_mut().enumerate() {
            let i = i as u8;
            *entry = RGB8 {
                r: (i >> 5) * 36,
                g: ((i >> 2) & 7) * 36,
                b: (i & 3) * 85,
            };
        }
        Self { entries }
    }

    pub fn from_entries(entries: [RGB8; 256]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RGB8; 256] {
        &self.entries
    }

    #[inline]
    pub fn get(&self, index: u8) -> RGB8 {
        self.entries[index as usize]
    }

    /// Look up every index.
    pub fn expand(&self, indices: &[u8]) -> Vec<RGB8> {
        indices.iter().map(|&i| self.get(i)).collect()
    }
}

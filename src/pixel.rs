/// Pixel memory layout.
///
/// The cool format stores exactly one layout, [`PixelLayout::Rgb332`]. The
/// other variants exist so hosts can describe what they are holding and get
/// a proper [`CoolError::UnsupportedFormat`](crate::CoolError::UnsupportedFormat)
/// instead of a silently misinterpreted buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// One byte per pixel, a palette index into an 8-bit RGB table
    /// (3 bits red, 3 bits green, 2 bits blue).
    #[default]
    Rgb332,
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
    /// 4 channels, 8-bit BGRA.
    Bgra8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb332 | Self::Gray8 => 1,
            Self::Rgb8 => 3,
            Self::Rgba8 | Self::Bgra8 => 4,
        }
    }

    /// Bits per pixel as stored in a cool file row.
    pub fn bits_per_pixel(&self) -> usize {
        self.bytes_per_pixel() * 8
    }

    /// Whether pixel values are palette indices rather than direct color.
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Rgb332)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rgb332_is_indexed() {
        assert!(PixelLayout::Rgb332.is_indexed());
        assert_eq!(PixelLayout::Rgb332.bits_per_pixel(), 8);
        assert!(!PixelLayout::Gray8.is_indexed());
        assert_eq!(PixelLayout::Bgra8.bytes_per_pixel(), 4);
    }
}

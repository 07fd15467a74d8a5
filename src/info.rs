use crate::cool::CoolHeader;
use crate::cool::rows::RowOrder;
use crate::error::CoolError;
use crate::pixel::PixelLayout;

/// Header-level information about a cool file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    /// Width as stored in the header.
    pub declared_width: i32,
    /// Height as stored in the header; its sign selects the row order.
    pub declared_height: i32,
    /// Plane width, `|declared_width|`.
    pub width: u32,
    /// Plane height, `|declared_height|`.
    pub height: u32,
    pub row_order: RowOrder,
    pub layout: PixelLayout,
}

impl ImageInfo {
    /// Probe the 10-byte header without touching row data.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CoolError> {
        Ok(Self::from_header(&CoolHeader::parse(data)?))
    }

    pub(crate) fn from_header(header: &CoolHeader) -> Self {
        Self {
            declared_width: header.width,
            declared_height: header.height,
            width: header.plane_width(),
            height: header.plane_height(),
            row_order: RowOrder::from_height(header.height),
            layout: PixelLayout::Rgb332,
        }
    }
}

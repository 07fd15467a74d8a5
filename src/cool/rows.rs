//! Row geometry and the row walk shared by the decoder and encoder.

use enough::Stop;

use crate::error::CoolError;

/// Order in which rows are stored in a cool file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowOrder {
    /// First stored row is the bottom of the image (positive height).
    BottomUp,
    /// First stored row is the top of the image (negative height).
    TopDown,
}

impl RowOrder {
    /// Row order implied by a declared height.
    pub fn from_height(height: i32) -> Self {
        if height > 0 {
            RowOrder::BottomUp
        } else {
            RowOrder::TopDown
        }
    }

    /// Plane row that holds file row `file_row` of a `height`-row image.
    #[inline]
    pub(crate) fn plane_row(self, file_row: u32, height: u32) -> u32 {
        match self {
            RowOrder::BottomUp => height - 1 - file_row,
            RowOrder::TopDown => file_row,
        }
    }
}

/// Per-row byte counts for one image width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowGeometry {
    pub width: u32,
    pub height: u32,
    /// Pixel bytes per row, `ceil(width * bpp / 8)`.
    pub row_bytes: usize,
    /// Zero bytes that pad a row to a multiple of 4.
    pub pad_bytes: usize,
}

impl RowGeometry {
    pub fn new(width: u32, height: u32, bits_per_pixel: usize) -> Result<Self, CoolError> {
        let row_bytes = (width as usize)
            .checked_mul(bits_per_pixel)
            .and_then(|bits| bits.checked_add(7))
            .map(|bits| bits / 8)
            .ok_or_else(|| CoolError::dimensions(width, height, "row size overflows"))?;
        Ok(Self {
            width,
            height,
            row_bytes,
            pad_bytes: row_bytes.wrapping_neg() & 3,
        })
    }

    /// Row stride with 4-byte alignment.
    pub fn aligned_stride(&self) -> usize {
        self.row_bytes + self.pad_bytes
    }

    /// Bytes of row data for `height` rows at `stride`.
    pub fn data_size(&self, stride: usize) -> Result<usize, CoolError> {
        stride
            .checked_mul(self.height as usize)
            .ok_or_else(|| CoolError::dimensions(self.width, self.height, "image size overflows"))
    }
}

/// File row stride chosen by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FileStride {
    /// Rows padded to 4 bytes, as the encoder writes them.
    Aligned(usize),
    /// Rows without padding. Accepted only when aligned rows don't fit.
    Unaligned(usize),
}

impl FileStride {
    pub fn bytes(self) -> usize {
        match self {
            FileStride::Aligned(n) | FileStride::Unaligned(n) => n,
        }
    }

    /// Pick the file stride for `available` bytes of row data.
    ///
    /// Aligned rows are tried first, then unpadded rows. Only when neither
    /// fits does this fail, reporting the unpadded requirement.
    pub fn select(geometry: &RowGeometry, available: usize) -> Result<Self, CoolError> {
        let aligned = geometry.aligned_stride();
        if geometry.data_size(aligned)? <= available {
            return Ok(FileStride::Aligned(aligned));
        }
        let unaligned = geometry.row_bytes;
        let needed = geometry.data_size(unaligned)?;
        if needed <= available {
            return Ok(FileStride::Unaligned(unaligned));
        }
        Err(CoolError::InsufficientData {
            needed,
            actual: available,
        })
    }
}

/// Visit every file row of a `height`-row image in file order.
///
/// `visit` receives the file row index and the plane row it maps to under
/// `order`. Stop is checked every 16 rows.
pub(crate) fn walk_rows<F>(
    height: u32,
    order: RowOrder,
    stop: &dyn Stop,
    mut visit: F,
) -> Result<(), CoolError>
where
    F: FnMut(u32, u32),
{
    for file_row in 0..height {
        if file_row % 16 == 0 {
            stop.check()?;
        }
        visit(file_row, order.plane_row(file_row, height));
    }
    Ok(())
}

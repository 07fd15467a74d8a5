//! Cool encoder: header plus bottom-up, zero-padded rows.

use alloc::vec::Vec;
use enough::Stop;

use super::rows::{RowGeometry, RowOrder, walk_rows};
use super::{CoolHeader, HEADER_LEN};
use crate::error::CoolError;
use crate::pixel::PixelLayout;
use crate::plane::Plane;

/// Check the declared dimensions against the plane and compute row geometry.
pub(crate) fn plan_rows(plane: &Plane<'_>, width: i32, height: i32) -> Result<RowGeometry, CoolError> {
    if width <= 0 {
        return Err(CoolError::dimensions(width, height, "width must be positive"));
    }
    if height == 0 {
        return Err(CoolError::dimensions(width, height, "height must be non-zero"));
    }
    let w = width.unsigned_abs();
    let h = height.unsigned_abs();
    if plane.width() < w || plane.height() < h {
        return Err(CoolError::dimensions(
            width,
            height,
            &alloc::format!(
                "plane is only {}x{}",
                plane.width(),
                plane.height()
            ),
        ));
    }
    RowGeometry::new(w, h, PixelLayout::Rgb332.bits_per_pixel())
}

/// Total file size for `geometry`.
pub(crate) fn file_size(geometry: &RowGeometry) -> Result<usize, CoolError> {
    geometry
        .data_size(geometry.aligned_stride())?
        .checked_add(HEADER_LEN)
        .ok_or_else(|| CoolError::dimensions(geometry.width, geometry.height, "file size overflows"))
}

/// Append header and rows to `out`.
///
/// Rows are always emitted bottom-up, whatever the sign of `height`; a
/// negative height is written to the header as given but not honored as a
/// top-down request.
pub(crate) fn write_rows(
    plane: &Plane<'_>,
    header: CoolHeader,
    geometry: &RowGeometry,
    out: &mut Vec<u8>,
    stop: &dyn Stop,
) -> Result<(), CoolError> {
    header.write(out);
    let width = geometry.width as usize;
    let pad_bytes = geometry.pad_bytes;
    walk_rows(geometry.height, RowOrder::BottomUp, stop, |_, plane_row| {
        out.extend_from_slice(&plane.row(plane_row)[..width]);
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    })
}

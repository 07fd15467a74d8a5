//! Cool decoder: copies padded file rows into a plane.

use enough::Stop;

use super::rows::{FileStride, RowGeometry, RowOrder, walk_rows};
use super::{CoolHeader, HEADER_LEN};
use crate::diag::{trace, warning};
use crate::error::CoolError;
use crate::pixel::PixelLayout;
use crate::plane::PlaneMut;

/// Row layout of a validated file, ready to be copied.
pub(crate) struct RowPlan {
    pub geometry: RowGeometry,
    pub stride: FileStride,
    pub order: RowOrder,
}

/// Work out row geometry and file stride for `header` over `data`.
///
/// Fails with [`CoolError::InsufficientData`] when the row data fits
/// neither the aligned nor the unaligned stride.
pub(crate) fn plan_rows(data: &[u8], header: &CoolHeader) -> Result<RowPlan, CoolError> {
    let width = header.plane_width();
    let height = header.plane_height();
    trace!("cool header: width {} height {}", header.width, header.height);

    let geometry = RowGeometry::new(width, height, PixelLayout::Rgb332.bits_per_pixel())?;
    let available = data.len().saturating_sub(HEADER_LEN);
    let stride = FileStride::select(&geometry, available)?;
    if let FileStride::Unaligned(n) = stride {
        warning!(
            "data size too small ({available} < {}), assuming missing line alignment ({n}-byte rows)",
            geometry.data_size(geometry.aligned_stride()).unwrap_or(usize::MAX)
        );
    }

    Ok(RowPlan {
        geometry,
        stride,
        order: RowOrder::from_height(header.height),
    })
}

/// Copy every file row into `plane`.
///
/// `plane` must be exactly the plane dimensions of the header that
/// produced `plan`.
pub(crate) fn copy_rows(
    data: &[u8],
    plan: &RowPlan,
    plane: &mut PlaneMut<'_>,
    stop: &dyn Stop,
) -> Result<(), CoolError> {
    let stride = plan.stride.bytes();
    let width = plan.geometry.width as usize;
    let rows = &data[HEADER_LEN..];
    walk_rows(plan.geometry.height, plan.order, stop, |file_row, plane_row| {
        let start = file_row as usize * stride;
        plane
            .row_mut(plane_row)
            .copy_from_slice(&rows[start..start + width]);
    })
}

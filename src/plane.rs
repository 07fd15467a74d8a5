//! Borrowed pixel planes with a signed row stride.
//!
//! A plane is `height` rows of `width` one-byte samples inside a larger
//! buffer. A positive stride stores row 0 first; a negative stride stores
//! row 0 last, so the same bytes read as a vertically flipped image.

use crate::error::CoolError;

/// Validate a plane layout and return the absolute stride.
fn check_layout(len: usize, width: u32, height: u32, stride: isize) -> Result<usize, CoolError> {
    let abs_stride = stride.unsigned_abs();
    if abs_stride < width as usize {
        return Err(CoolError::dimensions(
            width,
            height,
            &alloc::format!("stride {stride} is smaller than width"),
        ));
    }
    if height == 0 {
        return Ok(abs_stride);
    }
    let needed = (height as usize - 1)
        .checked_mul(abs_stride)
        .and_then(|n| n.checked_add(width as usize))
        .ok_or_else(|| CoolError::dimensions(width, height, "plane size overflows"))?;
    if len < needed {
        return Err(CoolError::BufferTooSmall {
            needed,
            actual: len,
        });
    }
    Ok(abs_stride)
}

#[inline]
fn row_offset(y: u32, height: u32, stride: isize) -> usize {
    let abs_stride = stride.unsigned_abs();
    if stride < 0 {
        (height - 1 - y) as usize * abs_stride
    } else {
        y as usize * abs_stride
    }
}

/// Read-only view of a pixel plane.
#[derive(Clone, Copy, Debug)]
pub struct Plane<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: isize,
}

impl<'a> Plane<'a> {
    /// Create a plane view with an explicit (possibly negative) stride.
    ///
    /// Fails with [`CoolError::InvalidDimensions`] when `|stride| < width`
    /// and [`CoolError::BufferTooSmall`] when `data` cannot hold every row.
    pub fn new(data: &'a [u8], width: u32, height: u32, stride: isize) -> Result<Self, CoolError> {
        check_layout(data.len(), width, height, stride)?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Create a tightly packed, top-down plane view (`stride == width`).
    pub fn packed(data: &'a [u8], width: u32, height: u32) -> Result<Self, CoolError> {
        let stride = isize::try_from(width)
            .map_err(|_| CoolError::dimensions(width, height, "width overflows stride"))?;
        Self::new(data, width, height, stride)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Signed byte distance from one row to the next.
    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Samples of row `y`, exactly `width` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [u8] {
        assert!(
            y < self.height,
            "row index {y} out of bounds (height: {})",
            self.height
        );
        let start = row_offset(y, self.height, self.stride);
        &self.data[start..start + self.width as usize]
    }
}

/// Mutable view of a caller-owned pixel plane.
#[derive(Debug)]
pub struct PlaneMut<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    stride: isize,
}

impl<'a> PlaneMut<'a> {
    /// Create a mutable plane view. Same validation as [`Plane::new`].
    pub fn new(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        stride: isize,
    ) -> Result<Self, CoolError> {
        check_layout(data.len(), width, height, stride)?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Create a tightly packed, top-down mutable plane view.
    pub fn packed(data: &'a mut [u8], width: u32, height: u32) -> Result<Self, CoolError> {
        let stride = isize::try_from(width)
            .map_err(|_| CoolError::dimensions(width, height, "width overflows stride"))?;
        Self::new(data, width, height, stride)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Mutable samples of row `y`, exactly `width` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row index {y} out of bounds (height: {})",
            self.height
        );
        let start = row_offset(y, self.height, self.stride);
        &mut self.data[start..start + self.width as usize]
    }

    /// Reborrow as a read-only view.
    pub fn as_plane(&self) -> Plane<'_> {
        Plane {
            data: &*self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_stride_flips_rows() {
        let data = [1u8, 2, 0, 3, 4, 0];
        let down = Plane::new(&data, 2, 2, 3).unwrap();
        let up = Plane::new(&data, 2, 2, -3).unwrap();
        assert_eq!(down.row(0), &[1, 2]);
        assert_eq!(up.row(0), &[3, 4]);
        assert_eq!(up.row(1), &[1, 2]);
    }

    #[test]
    fn last_row_needs_no_padding() {
        // 3 rows of width 2 at stride 4: 4 + 4 + 2 bytes.
        let data = [0u8; 10];
        assert!(Plane::new(&data, 2, 3, 4).is_ok());
        assert!(matches!(
            Plane::new(&data[..9], 2, 3, 4),
            Err(CoolError::BufferTooSmall { needed: 10, actual: 9 })
        ));
    }

    #[test]
    fn stride_smaller_than_width_rejected() {
        let data = [0u8; 16];
        assert!(matches!(
            Plane::new(&data, 4, 2, -3),
            Err(CoolError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn row_mut_writes_through() {
        let mut data = [0u8; 4];
        let mut plane = PlaneMut::new(&mut data, 2, 2, -2).unwrap();
        plane.row_mut(0).copy_from_slice(&[7, 8]);
        assert_eq!(plane.as_plane().row(0), &[7, 8]);
        assert_eq!(data, [0, 0, 7, 8]);
    }
}

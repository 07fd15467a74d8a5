use alloc::vec::Vec;

use crate::error::CoolError;
use crate::pixel::PixelLayout;

/// Supplies the buffers the codec writes into.
///
/// This is the seam to the host framework: a decoder asks for a plane,
/// an encoder asks for an output buffer. Implementations must reject
/// dimensions they cannot or will not serve with
/// [`CoolError::InvalidDimensions`], and report refused allocations with
/// [`CoolError::AllocationFailed`].
pub trait FrameAllocator {
    /// Accept or refuse plane dimensions before any row data is sized.
    ///
    /// Decoders call this right after the header is read, so a refusal
    /// wins over a short file. Defaults to accepting everything and
    /// leaving the decision to [`allocate_plane`](Self::allocate_plane).
    fn check_dimensions(&self, width: u32, height: u32) -> Result<(), CoolError> {
        let _ = (width, height);
        Ok(())
    }

    /// Allocate a zeroed, tightly packed plane of `width * height` pixels.
    fn allocate_plane(
        &mut self,
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Vec<u8>, CoolError>;

    /// Allocate an empty output buffer with room for exactly `size` bytes.
    fn allocate_output(&mut self, size: usize) -> Result<Vec<u8>, CoolError>;
}

/// Resource limits for decode/encode operations.
///
/// All fields default to `None` (no limit). `Limits` is also the default
/// [`FrameAllocator`]: it checks the limits, then reserves memory
/// fallibly so an oversized request becomes an error rather than an abort.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for a plane or output buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check plane dimensions. Zero-sized planes are always rejected.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), CoolError> {
        if width == 0 || height == 0 {
            return Err(CoolError::dimensions(width, height, "dimensions must be non-zero"));
        }
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(CoolError::dimensions(
                    width,
                    height,
                    &alloc::format!("width exceeds limit {max_w}"),
                ));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(CoolError::dimensions(
                    width,
                    height,
                    &alloc::format!("height exceeds limit {max_h}"),
                ));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(CoolError::dimensions(
                    width,
                    height,
                    &alloc::format!("pixel count {pixels} exceeds limit {max_px}"),
                ));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), CoolError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(CoolError::AllocationFailed { bytes });
            }
        }
        Ok(())
    }
}

fn try_alloc(bytes: usize) -> Result<Vec<u8>, CoolError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes)
        .map_err(|_| CoolError::AllocationFailed { bytes })?;
    Ok(buf)
}

impl FrameAllocator for Limits {
    fn check_dimensions(&self, width: u32, height: u32) -> Result<(), CoolError> {
        self.check(width, height)
    }

    fn allocate_plane(
        &mut self,
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Vec<u8>, CoolError> {
        self.check(width, height)?;
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
            .ok_or_else(|| CoolError::dimensions(width, height, "plane size overflows"))?;
        self.check_memory(bytes)?;
        let mut plane = try_alloc(bytes)?;
        plane.resize(bytes, 0);
        Ok(plane)
    }

    fn allocate_output(&mut self, size: usize) -> Result<Vec<u8>, CoolError> {
        self.check_memory(size)?;
        try_alloc(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_rejected() {
        let mut limits = Limits::default();
        let err = limits.allocate_plane(0, 4, PixelLayout::Rgb332).unwrap_err();
        assert!(matches!(err, CoolError::InvalidDimensions { width: 0, height: 4, .. }));
    }

    #[test]
    fn pixel_limit_rejects_plane() {
        let mut limits = Limits {
            max_pixels: Some(15),
            ..Default::default()
        };
        assert!(limits.allocate_plane(4, 4, PixelLayout::Rgb332).is_err());
        assert_eq!(limits.allocate_plane(5, 3, PixelLayout::Rgb332).unwrap().len(), 15);
    }

    #[test]
    fn memory_limit_rejects_output() {
        let mut limits = Limits {
            max_memory_bytes: Some(16),
            ..Default::default()
        };
        assert!(matches!(
            limits.allocate_output(17),
            Err(CoolError::AllocationFailed { bytes: 17 })
        ));
        let buf = limits.allocate_output(16).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 16);
    }
}

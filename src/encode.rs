use alloc::vec::Vec;

use enough::Stop;

use crate::cool::CoolHeader;
use crate::cool::encode::{file_size, plan_rows, write_rows};
use crate::error::CoolError;
use crate::limits::{FrameAllocator, Limits};
use crate::pixel::PixelLayout;
use crate::plane::Plane;

/// An encoded cool file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedFrame {
    data: Vec<u8>,
}

impl EncodedFrame {
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Cool files have no delta frames; every frame is a key frame.
    pub fn is_key_frame(&self) -> bool {
        true
    }
}

/// Builder for encode operations.
///
/// The pixel layout of the source plane is an explicit setting. Only
/// [`PixelLayout::Rgb332`] can be encoded; anything else fails with
/// [`CoolError::UnsupportedFormat`] before any work is done.
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    layout: PixelLayout,
    limits: Option<&'a Limits>,
}

impl Default for EncodeRequest<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> EncodeRequest<'a> {
    /// Encode request for 8-bit indexed (`Rgb332`) planes.
    pub fn new() -> Self {
        Self {
            layout: PixelLayout::Rgb332,
            limits: None,
        }
    }

    /// Declare the layout of the planes passed to [`encode`](Self::encode).
    pub fn with_layout(mut self, layout: PixelLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Apply a memory limit to the output buffer.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode `|height|` rows of `width` pixels from `plane`.
    ///
    /// `width` must be positive and `height` non-zero. The declared values
    /// go into the header verbatim, but rows are always written bottom-up:
    /// a negative height does not produce a top-down file.
    pub fn encode(
        &self,
        plane: Plane<'_>,
        width: i32,
        height: i32,
        stop: impl Stop,
    ) -> Result<EncodedFrame, CoolError> {
        let mut limits = self.limits.cloned().unwrap_or_default();
        self.encode_with_allocator(plane, width, height, &mut limits, stop)
    }

    /// Encode into an output buffer obtained from `allocator`.
    pub fn encode_with_allocator(
        &self,
        plane: Plane<'_>,
        width: i32,
        height: i32,
        allocator: &mut dyn FrameAllocator,
        stop: impl Stop,
    ) -> Result<EncodedFrame, CoolError> {
        if !self.layout.is_indexed() {
            return Err(CoolError::UnsupportedFormat(self.layout));
        }
        let geometry = plan_rows(&plane, width, height)?;
        let size = file_size(&geometry)?;
        stop.check()?;
        let mut data = allocator.allocate_output(size)?;
        write_rows(&plane, CoolHeader { width, height }, &geometry, &mut data, &stop)?;
        debug_assert_eq!(data.len(), size);
        Ok(EncodedFrame { data })
    }

    /// Encode a tightly packed, top-down buffer of `width * |height|` indices.
    pub fn encode_packed(
        &self,
        pixels: &[u8],
        width: i32,
        height: i32,
        stop: impl Stop,
    ) -> Result<EncodedFrame, CoolError> {
        if width <= 0 {
            return Err(CoolError::dimensions(width, height, "width must be positive"));
        }
        let w = width.unsigned_abs();
        let h = height.unsigned_abs();
        let expected = (w as usize)
            .checked_mul(h as usize)
            .ok_or_else(|| CoolError::dimensions(width, height, "plane size overflows"))?;
        if pixels.len() < expected {
            return Err(CoolError::BufferTooSmall {
                needed: expected,
                actual: pixels.len(),
            });
        }
        let plane = Plane::packed(&pixels[..expected], w, h)?;
        self.encode(plane, width, height, stop)
    }
}

use alloc::vec::Vec;

use enough::Stop;

use crate::cool::CoolHeader;
use crate::cool::decode::{copy_rows, plan_rows};
use crate::cool::rows::RowOrder;
use crate::error::CoolError;
use crate::info::ImageInfo;
use crate::limits::{FrameAllocator, Limits};
use crate::pixel::PixelLayout;
use crate::plane::{Plane, PlaneMut};

/// Decoded image output: a tightly packed, top-down plane of palette indices.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    /// Plane width in pixels.
    pub width: u32,
    /// Plane height in rows.
    pub height: u32,
    pub layout: PixelLayout,
    /// Header fields as declared in the file.
    pub info: ImageInfo,
    /// Input bytes consumed. The format has no length field, so this is
    /// always the whole input.
    pub consumed: usize,
}

impl DecodeOutput {
    /// Access the pixel data (row 0 is the top of the image).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Borrow the pixels as a packed plane.
    ///
    /// Fails with [`CoolError::BufferTooSmall`] if `width` or `height` were
    /// changed to describe more pixels than were decoded.
    pub fn plane(&self) -> Result<Plane<'_>, CoolError> {
        Plane::packed(&self.pixels, self.width, self.height)
    }

    /// Row order the file was stored in.
    pub fn row_order(&self) -> RowOrder {
        self.info.row_order
    }

    /// Every cool frame is self-contained.
    pub fn is_key_frame(&self) -> bool {
        true
    }

    /// Expand palette indices to RGB through `palette`.
    #[cfg(feature = "rgb")]
    pub fn to_rgb8(&self, palette: &crate::Palette) -> Vec<rgb::RGB8> {
        palette.expand(&self.pixels)
    }

    /// Zero-copy view of the index plane as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, u8> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Copy the index plane into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<u8> {
        imgref::ImgVec::new(self.pixels.clone(), self.width as usize, self.height as usize)
    }

    /// Expand through `palette` into an [`imgref::ImgVec`] of RGB pixels.
    #[cfg(feature = "imgref")]
    pub fn to_rgb8_imgvec(&self, palette: &crate::Palette) -> imgref::ImgVec<rgb::RGB8> {
        imgref::ImgVec::new(
            self.to_rgb8(palette),
            self.width as usize,
            self.height as usize,
        )
    }
}

/// Builder for decode operations.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply resource limits to the plane allocation.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode into a newly allocated plane, honoring any limits.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, CoolError> {
        let mut limits = self.limits.cloned().unwrap_or_default();
        self.decode_with_allocator(&mut limits, stop)
    }

    /// Decode into a plane obtained from `allocator`.
    ///
    /// The allocator vets the dimensions first, then the row data is sized,
    /// and only then is a plane allocated, so a truncated file never
    /// triggers an allocation.
    pub fn decode_with_allocator(
        self,
        allocator: &mut dyn FrameAllocator,
        stop: impl Stop,
    ) -> Result<DecodeOutput, CoolError> {
        let data = self.data;
        let header = CoolHeader::parse(data)?;
        let (width, height) = (header.plane_width(), header.plane_height());
        allocator.check_dimensions(width, height)?;
        let plan = plan_rows(data, &header)?;

        stop.check()?;
        let mut pixels = allocator.allocate_plane(width, height, PixelLayout::Rgb332)?;
        let mut plane = PlaneMut::packed(&mut pixels, width, height)?;
        copy_rows(data, &plan, &mut plane, &stop)?;
        pixels.truncate(width as usize * height as usize);

        Ok(DecodeOutput {
            pixels,
            width,
            height,
            layout: PixelLayout::Rgb332,
            info: ImageInfo::from_header(&header),
            consumed: data.len(),
        })
    }

    /// Decode into a caller-owned plane.
    ///
    /// The plane must have exactly the dimensions the header declares
    /// (`|width|` by `|height|`); its stride may be anything valid,
    /// including negative. Returns the header info and bytes consumed.
    pub fn decode_into(
        self,
        plane: &mut PlaneMut<'_>,
        stop: impl Stop,
    ) -> Result<(ImageInfo, usize), CoolError> {
        let data = self.data;
        let header = CoolHeader::parse(data)?;
        let (width, height) = (header.plane_width(), header.plane_height());
        self.limits.cloned().unwrap_or_default().check(width, height)?;
        if plane.width() != width || plane.height() != height {
            return Err(CoolError::dimensions(
                header.width,
                header.height,
                &alloc::format!(
                    "caller plane is {}x{}, expected {width}x{height}",
                    plane.width(),
                    plane.height()
                ),
            ));
        }
        let plan = plan_rows(data, &header)?;
        stop.check()?;
        copy_rows(data, &plan, plane, &stop)?;
        Ok((ImageInfo::from_header(&header), data.len()))
    }
}

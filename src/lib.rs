//! # zencool
//!
//! Decoder and encoder for the uncompressed "cool" raster format: a
//! 10-byte header followed by 4-byte-aligned rows of 8-bit palette indices.
//!
//! ## Format
//!
//! - Magic `co`, then little-endian `i32` width and height.
//! - A positive height stores rows bottom-up, a negative height top-down.
//!   The decoder honors both; the encoder always writes bottom-up.
//! - Rows are padded with zeros to a multiple of 4 bytes. Files whose rows
//!   lack that padding are still accepted when the padded size doesn't fit.
//!
//! ## Non-Goals
//!
//! - Compression
//! - Any pixel layout besides 8-bit indexed RGB ([`PixelLayout::Rgb332`])
//! - Streaming or partial-frame decode
//!
//! ## Usage
//!
//! ```
//! use zencool::{DecodeRequest, EncodeRequest, ImageInfo};
//! use enough::Unstoppable;
//!
//! let pixels = [0xAAu8, 0xBB];
//! let frame = EncodeRequest::new().encode_packed(&pixels, 2, 1, Unstoppable)?;
//! assert_eq!(frame.bytes().len(), 14);
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(frame.bytes())?;
//! assert_eq!((info.width, info.height), (2, 1));
//!
//! let decoded = DecodeRequest::new(frame.bytes()).decode(Unstoppable)?;
//! assert_eq!(decoded.pixels(), &pixels);
//! # Ok::<(), zencool::CoolError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod cool;
mod diag;
mod error;
mod info;
mod limits;
mod pixel;
mod plane;

#[cfg(feature = "rgb")]
mod palette;

mod decode;
mod encode;

// Re-exports
pub use cool::rows::RowOrder;
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::{EncodeRequest, EncodedFrame};
pub use enough::{Stop, Unstoppable};
pub use error::CoolError;
pub use info::ImageInfo;
pub use limits::{FrameAllocator, Limits};
#[cfg(feature = "rgb")]
pub use palette::Palette;
pub use pixel::PixelLayout;
pub use plane::{Plane, PlaneMut};

/// Read the header of a cool file.
pub fn probe(data: &[u8]) -> Result<ImageInfo, CoolError> {
    ImageInfo::from_bytes(data)
}

/// Decode a cool file into a packed, top-down plane.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, CoolError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode a cool file into a caller-owned plane.
///
/// Returns the header info and the number of input bytes consumed.
pub fn decode_into(
    data: &[u8],
    plane: &mut PlaneMut<'_>,
    stop: impl Stop,
) -> Result<(ImageInfo, usize), CoolError> {
    DecodeRequest::new(data).decode_into(plane, stop)
}

/// Encode a packed, top-down buffer of palette indices.
pub fn encode(
    pixels: &[u8],
    width: i32,
    height: i32,
    stop: impl Stop,
) -> Result<alloc::vec::Vec<u8>, CoolError> {
    EncodeRequest::new()
        .encode_packed(pixels, width, height, stop)
        .map(EncodedFrame::into_vec)
}

/// Encode `|height|` rows from a plane with any stride.
pub fn encode_plane(
    plane: Plane<'_>,
    width: i32,
    height: i32,
    stop: impl Stop,
) -> Result<EncodedFrame, CoolError> {
    EncodeRequest::new().encode(plane, width, height, stop)
}

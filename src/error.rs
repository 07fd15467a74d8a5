use alloc::string::String;
use enough::StopReason;

/// Errors from cool decoding and encoding.
///
/// Every error is terminal for the call that produced it: no partial
/// plane or buffer is ever returned alongside one.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoolError {
    #[error("bad magic number: expected \"co\", found {found:02x?}")]
    InvalidMagic { found: [u8; 2] },

    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: i64,
        height: i64,
        reason: String,
    },

    #[error("not enough data: need {needed} bytes, got {actual}")]
    InsufficientData { needed: usize, actual: usize },

    #[error("unsupported pixel layout {0:?} (only Rgb332 is supported)")]
    UnsupportedFormat(crate::PixelLayout),

    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl CoolError {
    pub(crate) fn dimensions(width: impl Into<i64>, height: impl Into<i64>, reason: &str) -> Self {
        CoolError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
            reason: reason.into(),
        }
    }
}

impl From<StopReason> for CoolError {
    fn from(r: StopReason) -> Self {
        CoolError::Cancelled(r)
    }
}

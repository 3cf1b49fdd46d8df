//! Error types for pixel filter operations.

use thiserror::Error;

/// Precondition violations reported before any pixel is touched.
///
/// Once a [`PixelBuffer`](crate::filters::core::PixelBuffer) has been
/// constructed the filters themselves cannot fail; out-of-range channel
/// values are saturated, never reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Width or height is zero, negative, or too large to address.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// Buffer length does not equal `width * height * 4`.
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    /// Blur radius below zero.
    #[error("negative blur radius: {0}")]
    NegativeRadius(i64),

    /// Array view whose channel axis is not RGBA.
    #[error("expected 4 channels (RGBA), got {0}")]
    ChannelCount(usize),

    /// Array view that is not laid out row-major without gaps.
    #[error("pixel array is not contiguous in standard layout")]
    NonContiguous,

    /// Filter name not recognized by dispatch.
    #[error("unknown filter: {0:?}")]
    UnknownFilter(String),
}

/// Result type for pixel filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

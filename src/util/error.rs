//! Error types for slotfit.

use thiserror::Error;

/// Result alias for slotfit operations.
pub type SlotFitResult<T> = std::result::Result<T, SlotFitError>;

/// Errors that can occur while detecting holes or computing transforms.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SlotFitError {
    /// A pixel buffer was created with a zero width or height.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
    /// The backing buffer is shorter than the dimensions require.
    #[error("buffer too small: needed {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Minimum byte length required by the dimensions.
        needed: usize,
        /// Actual byte length of the supplied buffer.
        got: usize,
    },
    /// The row stride is smaller than the row width.
    #[error("invalid stride: width {width}, stride {stride}")]
    InvalidStride {
        /// Row width in pixels.
        width: usize,
        /// Stride in pixels between row starts.
        stride: usize,
    },
    /// The template image bytes could not be decoded.
    #[error("decode failed: {reason}")]
    DecodeFailed {
        /// Decoder error message.
        reason: String,
    },
    /// The template contains no marker-colored region above the noise threshold.
    #[error("no holes found in template")]
    NoHolesFound,
    /// An aspect ratio input was zero, negative, or not finite.
    #[error("invalid aspect ratio: {value}")]
    InvalidAspectRatio {
        /// The offending input value.
        value: f32,
    },
    /// A hole index does not exist in the template geometry.
    #[error("hole index {index} out of bounds (template has {len} holes)")]
    HoleIndexOutOfBounds {
        /// Requested hole index.
        index: usize,
        /// Number of holes in the geometry.
        len: usize,
    },
}

//! Error types for cvd-core operations.
//!
//! Buffer construction is the only fallible operation in this crate: the
//! geometry handed over by a decoder must describe a non-empty image whose
//! sample count matches the data it came with.
//!
//! # Usage
//!
//! ```rust
//! use cvd_core::{Error, PixelBuffer};
//!
//! let err = PixelBuffer::from_rgb(0, 4, Vec::new()).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::buffer::PixelBuffer`] - Construction checks
//! - `cvd-cli` - Reported with file context when decoding

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing pixel buffers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero, or `width * height * 3` overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Sample array length does not equal `width * height * 3`.
    #[error("buffer size mismatch: expected {expected} samples, got {got}")]
    BufferSize {
        /// Samples required by the geometry
        expected: usize,
        /// Samples actually supplied
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BufferSize`] error.
    #[inline]
    pub fn buffer_size(expected: usize, got: usize) -> Self {
        Self::BufferSize { expected, got }
    }

    /// Returns `true` if this is a geometry error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }
}

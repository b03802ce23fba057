//! # cvd-core
//!
//! Core types for color vision accessibility filters.
//!
//! This crate provides the foundational types used throughout cvd-rs:
//!
//! - [`PixelBuffer`] - Immutable 8-bit RGB image with cheap clones
//! - [`ChannelOrder`] - RGB/BGR sample order at the decoder/encoder boundary
//! - [`pixel`] - 8-bit quantization and the shared clamping policy
//! - [`Error`] - Buffer construction errors
//!
//! ## Crate Structure
//!
//! ```text
//! cvd-core (this crate)
//!    ^
//!    |
//!    +-- cvd-color (color space conversions)
//!    +-- cvd-ops (filter kernels, registry)
//!    +-- cvd-cli (decode -> filter -> encode)
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Row-parallel [`PixelBuffer::map_pixels`] via rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::{ChannelOrder, PixelBuffer};
pub use error::{Error, Result};
pub use pixel::{Rgb8, CHANNELS};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::buffer::{ChannelOrder, PixelBuffer};
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{quantize_unit, saturate, Rgb8, CHANNELS};
}

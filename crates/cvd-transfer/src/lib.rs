//! # cvd-transfer
//!
//! Transfer functions (OETF/EOTF) used by the color vision filters.
//!
//! - **OETF**: linear -> encoded
//! - **EOTF**: encoded -> linear
//!
//! | Function | Used for | Toe |
//! |----------|----------|-----|
//! | [`power`] | Cone-space simulation | none, pure `v^2.4` |
//! | [`srgb`] | CIE Lab conversion | IEC 61966-2-1 linear segment |
//!
//! All functions work on normalized [0, 1] values; quantization to 8 bits is
//! done by the caller.
//!
//! ```rust
//! use cvd_transfer::{power, srgb};
//!
//! // The pure power law is darker near black than sRGB.
//! assert!(power::eotf(0.03) < srgb::eotf(0.03));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod power;
pub mod srgb;

//! # cvd-color
//!
//! Color space conversions behind the color vision filters.
//!
//! Every routine is a pure function of one pixel (or one sample). Nothing
//! looks at neighbouring pixels and nothing keeps state, so callers may apply
//! them across a buffer in any order or in parallel.
//!
//! # Conversions
//!
//! | From | To | Function |
//! |------|----|----------|
//! | 8-bit sample | linear light | [`srgb_to_linear`] |
//! | linear light | 8-bit sample | [`linear_to_srgb`] |
//! | linear RGB | LMS cones | [`linear_rgb_to_lms`] |
//! | LMS cones | linear RGB | [`lms_to_linear_rgb`] |
//! | 8-bit RGB | CIE Lab | [`rgb_to_lab`] |
//! | CIE Lab | 8-bit RGB | [`lab_to_rgb`] |
//!
//! The cone path linearizes with a pure `v^2.4` power law, while the Lab
//! path uses the IEC sRGB curve with its linear toe.
//!
//! # Architecture
//!
//! ```text
//!                    cvd-color
//!                        |
//!         +--------------+--------------+
//!         |              |              |
//!   cvd-transfer     cvd-math       cvd-core
//! ```
//!
//! # Example
//!
//! ```rust
//! use cvd_color::{decode_pixel, encode_pixel, linear_rgb_to_lms, lms_to_linear_rgb};
//!
//! let lms = linear_rgb_to_lms(decode_pixel([200, 50, 50]));
//! let back = encode_pixel(lms_to_linear_rgb(lms));
//! assert!(back.iter().zip([200u8, 50, 50]).all(|(a, b)| a.abs_diff(b) <= 1));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lab;
pub mod linear;
pub mod lms;

#[cfg(test)]
mod test_util;

pub use lab::{lab_to_rgb, lab_to_xyz, rgb_to_lab, xyz_to_lab, Lab, Lab8};
pub use linear::{decode_pixel, encode_pixel, linear_to_srgb, srgb_to_linear};
pub use lms::{linear_rgb_to_lms, lms_to_linear_rgb, Lms};

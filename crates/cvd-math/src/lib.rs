//! # cvd-math
//!
//! Small linear-algebra primitives for color vision filters.
//!
//! - [`Mat3`] - 3x3 matrices for cone-space and XYZ transforms
//! - [`Vec3`] - float triplets for linear RGB, LMS, and XYZ values
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Used By
//!
//! - `cvd-color` - Color space conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;

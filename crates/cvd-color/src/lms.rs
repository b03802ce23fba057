//! Linear RGB to LMS cone space and back.
//!
//! The cone model describes a color by the responses of the long (L), medium
//! (M), and short (S) wavelength cones. Simulating a missing cone type is a
//! matter of replacing one response with a combination of the other two.
//!
//! The two matrices are fixed published tables. [`LMS_TO_RGB`] is the
//! rounded inverse of [`RGB_TO_LMS`]; their product is the identity to within
//! about 1e-4, which is below one 8-bit step after encoding.

use cvd_math::{Mat3, Vec3};

/// Linear RGB -> LMS.
pub const RGB_TO_LMS: Mat3 = Mat3::from_rows([
    [0.31394, 0.63957, 0.04652],
    [0.15530, 0.75796, 0.08673],
    [0.01772, 0.10945, 0.87277],
]);

/// LMS -> linear RGB.
pub const LMS_TO_RGB: Mat3 = Mat3::from_rows([
    [5.47213, -4.64189, 0.16958],
    [-1.12464, 2.29255, -0.16786],
    [0.02993, -0.19325, 1.16339],
]);

/// Cone responses of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lms {
    /// Long-wavelength (red) cone response
    pub l: f32,
    /// Medium-wavelength (green) cone response
    pub m: f32,
    /// Short-wavelength (blue) cone response
    pub s: f32,
}

impl Lms {
    /// Creates a cone sample.
    #[inline]
    pub const fn new(l: f32, m: f32, s: f32) -> Self {
        Self { l, m, s }
    }

    /// Returns a copy with the medium response replaced.
    #[inline]
    pub const fn with_m(self, m: f32) -> Self {
        Self { m, ..self }
    }
}

impl From<Vec3> for Lms {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Lms> for Vec3 {
    #[inline]
    fn from(c: Lms) -> Self {
        Vec3::new(c.l, c.m, c.s)
    }
}

/// Converts linear RGB to cone responses.
///
/// # Example
///
/// ```rust
/// use cvd_color::{linear_rgb_to_lms, Lms};
/// use cvd_math::Vec3;
///
/// let lms = linear_rgb_to_lms(Vec3::new(1.0, 0.0, 0.0));
/// assert_eq!(lms, Lms::new(0.31394, 0.15530, 0.01772));
/// ```
#[inline]
pub fn linear_rgb_to_lms(rgb: Vec3) -> Lms {
    (RGB_TO_LMS * rgb).into()
}

/// Converts cone responses to linear RGB.
///
/// Output is not clamped; saturated colors can go slightly negative.
#[inline]
pub fn lms_to_linear_rgb(lms: Lms) -> Vec3 {
    LMS_TO_RGB * Vec3::from(lms)
}

//! Pure power-law transfer with exponent 2.4.
//!
//! This is the curve the deuteranopia simulation linearizes with. It is the
//! power segment of sRGB applied over the whole range: there is no linear toe
//! near black and no 0.055 offset, so `decode(v) = v^2.4` exactly.
//!
//! # Range
//!
//! - Input/Output: [0, 1]. Non-positive input maps to 0.

/// Exponent of the curve.
pub const GAMMA: f32 = 2.4;

/// Decodes an encoded value to linear light: `v^2.4`.
///
/// # Example
///
/// ```rust
/// use cvd_transfer::power::eotf;
///
/// assert!((eotf(0.5) - 0.1895).abs() < 1e-4);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= 0.0 { 0.0 } else { v.powf(GAMMA) }
}

/// Encodes linear light: `l^(1/2.4)`.
///
/// Negative input (possible after a cone-space round trip) maps to 0.
///
/// # Example
///
/// ```rust
/// use cvd_transfer::power::oetf;
///
/// assert_eq!(oetf(-0.2), 0.0);
/// assert!((oetf(1.0) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= 0.0 { 0.0 } else { l.powf(1.0 / GAMMA) }
}

/// Applies [`eotf`] to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies [`oetf`] to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            assert_abs_diff_eq!(oetf(eotf(v)), v, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-6);
        assert_eq!(oetf(0.0), 0.0);
        assert_eq!(eotf(-1.0), 0.0);
    }

    #[test]
    fn test_no_linear_toe() {
        // Near black the curve stays a power law, well below v / 12.92.
        let v = 0.02;
        assert_abs_diff_eq!(eotf(v), v.powf(2.4), epsilon = 1e-9);
        assert!(eotf(v) < v / 12.92);
    }

    #[test]
    fn test_rgb_helpers() {
        let lin = eotf_rgb([0.0, 0.5, 1.0]);
        let back = oetf_rgb(lin);
        assert_abs_diff_eq!(back[1], 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(back[2], 1.0, epsilon = 1e-5);
    }
}

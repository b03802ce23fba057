//! IEC 61966-2-1 sRGB curve, for the Lab conversion only.
//!
//! The Lab filters compare a\* against fixed thresholds (133/164 in the
//! 8-bit encoding). Those numbers only mean "reddish" when Lab is computed
//! the way imaging libraries compute it, which is from sRGB decoded with
//! this piecewise curve. The cone-space filter linearizes with the plain
//! `v^2.4` law in [`crate::power`] instead, and its output depends on that
//! curve.
//!
//! Below `0.04045` this curve is a straight line of slope `1/12.92`, so near
//! black it decodes much brighter than `v^2.4`.

/// Decodes an sRGB value in [0, 1] to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use cvd_transfer::srgb::eotf;
///
/// // Mid-gray in Lab terms: L* = 50 is about 18% linear.
/// assert!((eotf(0.4663) - 0.1842).abs() < 1e-3);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes linear light to sRGB. Negative input stays negative; the 8-bit
/// quantizer clamps it to 0.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
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
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_knee_is_continuous() {
        let below = eotf(0.04045);
        let above = ((0.04045f32 + 0.055) / 1.055).powf(2.4);
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
        assert_abs_diff_eq!(oetf(0.0031308), 0.0031308 * 12.92, epsilon = 1e-6);
    }

    #[test]
    fn test_linear_segment() {
        assert_abs_diff_eq!(eotf(0.04), 0.04 / 12.92, epsilon = 1e-9);
        assert_abs_diff_eq!(oetf(0.001), 0.01292, epsilon = 1e-7);
    }
}

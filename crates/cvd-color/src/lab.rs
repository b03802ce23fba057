//! CIE L\*a\*b\* conversion for 8-bit sRGB pixels.
//!
//! The path is sRGB (IEC curve) -> linear -> XYZ (D65) -> Lab, and the exact
//! reverse. Both directions run in `f32` with no intermediate quantization,
//! so an unmodified pixel survives the round trip to within one 8-bit step.
//!
//! # 8-bit encoding
//!
//! Imaging libraries commonly store Lab in three bytes:
//!
//! ```text
//! L8 = L * 255 / 100     (0..100  -> 0..255)
//! a8 = a + 128           (-128..127 -> 0..255)
//! b8 = b + 128
//! ```
//!
//! The lab-shift filters state their thresholds and shift sizes in this
//! encoding; [`Lab::encode_8bit`] and [`Lab8::decode`] convert between the
//! two.
//!
//! # Example
//!
//! ```rust
//! use cvd_color::{lab_to_rgb, rgb_to_lab};
//!
//! let lab = rgb_to_lab([200, 50, 50]);
//! assert!(lab.a > 50.0); // reddish
//! assert_eq!(lab_to_rgb(lab), [200, 50, 50]);
//! ```

use cvd_core::pixel::{normalize, quantize_unit, saturate, Rgb8};
use cvd_math::{Mat3, Vec3};
use cvd_transfer::srgb;

/// Linear sRGB -> CIE XYZ, D65.
pub const RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// CIE XYZ, D65 -> linear sRGB.
pub const XYZ_TO_RGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// D65 reference white in XYZ (Y normalized to 1).
pub const D65_WHITE: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// 6/29, the knee of the Lab companding function.
const DELTA: f32 = 6.0 / 29.0;

/// Scale from L\* (0..100) to the 8-bit L channel (0..255).
pub const L_TO_8BIT: f32 = 255.0 / 100.0;

/// Offset of the a\*/b\* channels in the 8-bit encoding.
pub const AB_OFFSET: f32 = 128.0;

/// A CIE L\*a\*b\* color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness, 0..100
    pub l: f32,
    /// Green (-) to red (+)
    pub a: f32,
    /// Blue (-) to yellow (+)
    pub b: f32,
}

impl Lab {
    /// Creates a Lab color.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Quantizes to the 3-byte encoding, saturating each channel.
    #[inline]
    pub fn encode_8bit(self) -> Lab8 {
        Lab8 {
            l: saturate(self.l * L_TO_8BIT),
            a: saturate(self.a + AB_OFFSET),
            b: saturate(self.b + AB_OFFSET),
        }
    }
}

/// A Lab color in the 3-byte encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Lab8 {
    /// `L * 255 / 100`
    pub l: u8,
    /// `a + 128`
    pub a: u8,
    /// `b + 128`
    pub b: u8,
}

impl Lab8 {
    /// Expands back to float Lab.
    #[inline]
    pub fn decode(self) -> Lab {
        Lab {
            l: self.l as f32 / L_TO_8BIT,
            a: self.a as f32 - AB_OFFSET,
            b: self.b as f32 - AB_OFFSET,
        }
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[inline]
fn lab_f_inv(f: f32) -> f32 {
    if f > DELTA {
        f * f * f
    } else {
        3.0 * DELTA * DELTA * (f - 4.0 / 29.0)
    }
}

/// Converts CIE XYZ (D65) to Lab.
pub fn xyz_to_lab(xyz: Vec3) -> Lab {
    let fx = lab_f(xyz.x / D65_WHITE.x);
    let fy = lab_f(xyz.y / D65_WHITE.y);
    let fz = lab_f(xyz.z / D65_WHITE.z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Converts Lab to CIE XYZ (D65).
pub fn lab_to_xyz(lab: Lab) -> Vec3 {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;
    Vec3::new(
        D65_WHITE.x * lab_f_inv(fx),
        D65_WHITE.y * lab_f_inv(fy),
        D65_WHITE.z * lab_f_inv(fz),
    )
}

/// Converts an 8-bit sRGB pixel to Lab.
pub fn rgb_to_lab(px: Rgb8) -> Lab {
    let linear = Vec3::new(
        srgb::eotf(normalize(px[0])),
        srgb::eotf(normalize(px[1])),
        srgb::eotf(normalize(px[2])),
    );
    xyz_to_lab(RGB_TO_XYZ * linear)
}

/// Converts Lab to an 8-bit sRGB pixel.
///
/// Colors outside the sRGB gamut are clamped per channel.
pub fn lab_to_rgb(lab: Lab) -> Rgb8 {
    let linear = XYZ_TO_RGB * lab_to_xyz(lab);
    [
        quantize_unit(srgb::oetf(linear.x)),
        quantize_unit(srgb::oetf(linear.y)),
        quantize_unit(srgb::oetf(linear.z)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::to_glam;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white_and_black() {
        let white = rgb_to_lab([255, 255, 255]);
        assert_abs_diff_eq!(white.l, 100.0, epsilon = 0.01);
        assert_abs_diff_eq!(white.a, 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(white.b, 0.0, epsilon = 0.01);

        let black = rgb_to_lab([0, 0, 0]);
        assert_abs_diff_eq!(black.l, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(black.a, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(black.b, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_known_values() {
        // Reference values for D65 sRGB red and (200, 50, 50).
        let red = rgb_to_lab([255, 0, 0]);
        assert_abs_diff_eq!(red.l, 53.2408, epsilon = 0.01);
        assert_abs_diff_eq!(red.a, 80.0925, epsilon = 0.01);
        assert_abs_diff_eq!(red.b, 67.2032, epsilon = 0.01);

        let lab = rgb_to_lab([200, 50, 50]);
        assert_abs_diff_eq!(lab.l, 45.3519, epsilon = 0.01);
        assert_abs_diff_eq!(lab.a, 58.1962, epsilon = 0.01);
        assert_abs_diff_eq!(lab.b, 36.4880, epsilon = 0.01);
    }

    #[test]
    fn test_roundtrip_every_color() {
        let mut worst = 0u8;
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let px = [r, g, b];
                    let back = lab_to_rgb(rgb_to_lab(px));
                    for c in 0..3 {
                        worst = worst.max(back[c].abs_diff(px[c]));
                    }
                    assert!(worst <= 1, "{px:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn test_xyz_roundtrip_matrices() {
        let product = to_glam(&XYZ_TO_RGB) * to_glam(&RGB_TO_XYZ);
        assert!(product.abs_diff_eq(glam::Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_companding_continuity() {
        let knee = DELTA * DELTA * DELTA;
        assert_abs_diff_eq!(lab_f(knee), DELTA, epsilon = 1e-5);
        assert_abs_diff_eq!(lab_f_inv(DELTA), knee, epsilon = 1e-6);
        assert_abs_diff_eq!(lab_f_inv(lab_f(0.001)), 0.001, epsilon = 1e-7);
    }

    #[test]
    fn test_encode_8bit() {
        let enc = Lab::new(100.0, -128.0, 127.0).encode_8bit();
        assert_eq!(enc, Lab8 { l: 255, a: 0, b: 255 });

        let enc = Lab::new(40.0, 5.0, -5.0).encode_8bit();
        assert_eq!(enc, Lab8 { l: 102, a: 133, b: 123 });

        let saturated = Lab::new(120.0, 200.0, -300.0).encode_8bit();
        assert_eq!(saturated, Lab8 { l: 255, a: 255, b: 0 });
    }

    #[test]
    fn test_decode_8bit() {
        let lab = Lab8 { l: 255, a: 133, b: 128 }.decode();
        assert_abs_diff_eq!(lab.l, 100.0, epsilon = 1e-4);
        assert_eq!(lab.a, 5.0);
        assert_eq!(lab.b, 0.0);
    }
}

//! 8-bit encoded samples to and from linear light.
//!
//! Uses the pure `v^2.4` curve from [`cvd_transfer::power`]. Decoding is
//! exact for all 256 inputs; encoding rounds to nearest and saturates, so
//! decode-then-encode reproduces every 8-bit value.

use cvd_core::pixel::{normalize, quantize_unit, Rgb8};
use cvd_math::Vec3;
use cvd_transfer::power;

/// Decodes one 8-bit sample to linear light: `(v / 255)^2.4`.
///
/// # Example
///
/// ```rust
/// use cvd_color::srgb_to_linear;
///
/// assert_eq!(srgb_to_linear(0), 0.0);
/// assert!((srgb_to_linear(255) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn srgb_to_linear(v: u8) -> f32 {
    power::eotf(normalize(v))
}

/// Encodes linear light to an 8-bit sample: `round(l^(1/2.4) * 255)`,
/// clamped to [0, 255].
///
/// # Example
///
/// ```rust
/// use cvd_color::linear_to_srgb;
///
/// assert_eq!(linear_to_srgb(-0.3), 0);
/// assert_eq!(linear_to_srgb(1.2), 255);
/// ```
#[inline]
pub fn linear_to_srgb(l: f32) -> u8 {
    quantize_unit(power::oetf(l))
}

/// Decodes an RGB pixel to linear RGB.
#[inline]
pub fn decode_pixel(px: Rgb8) -> Vec3 {
    Vec3::from(power::eotf_rgb(px.map(normalize)))
}

/// Encodes linear RGB back to an 8-bit pixel, clamping each channel.
#[inline]
pub fn encode_pixel(rgb: Vec3) -> Rgb8 {
    power::oetf_rgb(rgb.to_array()).map(quantize_unit)
}

//! 8-bit pixel samples and quantization.
//!
//! Every filter ends by turning a floating-point value back into an 8-bit
//! sample. The helpers here are the single place that happens, so the
//! clamping policy is the same everywhere: out-of-range values saturate,
//! NaN becomes 0, and in-range values round to nearest.
//!
//! # Example
//!
//! ```rust
//! use cvd_core::pixel::{quantize_unit, saturate};
//!
//! assert_eq!(quantize_unit(0.5), 128);
//! assert_eq!(quantize_unit(1.7), 255);
//! assert_eq!(saturate(-12.0), 0);
//! assert_eq!(saturate(f32::NAN), 0);
//! ```

/// Number of samples per pixel.
pub const CHANNELS: usize = 3;

/// One pixel as three 8-bit samples in red, green, blue order.
pub type Rgb8 = [u8; CHANNELS];

/// Largest 8-bit sample value as `f32`.
pub const MAX_SAMPLE: f32 = 255.0;

/// Maps an 8-bit sample to [0, 1].
#[inline]
pub fn normalize(v: u8) -> f32 {
    v as f32 / MAX_SAMPLE
}

/// Quantizes a [0, 1] value to 8 bits, saturating outside the range.
#[inline]
pub fn quantize_unit(v: f32) -> u8 {
    saturate(v * MAX_SAMPLE)
}

/// Rounds a value already on the 0..255 scale, saturating outside it.
#[inline]
pub fn saturate(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, MAX_SAMPLE) as u8
}

/// Reverses the sample order of a pixel (RGB <-> BGR).
#[inline]
pub fn swap_rb(px: Rgb8) -> Rgb8 {
    [px[2], px[1], px[0]]
}

//! Deuteranopia simulation in LMS cone space.
//!
//! A deuteranope lacks working medium-wavelength (green) cones. The
//! simulation linearizes each pixel, moves it to cone space, throws away the
//! M response, and rebuilds it from L and S:
//!
//! ```text
//! M' = 0.82781 L + 0.17216 S   if S <= L
//! M' = 0.81951 L + 0.18046 S   otherwise
//! ```
//!
//! The result goes back through linear RGB and is re-encoded with clamping.
//! Colors that differ only in their M response collapse onto the same output,
//! which is the red-green confusion a deuteranope experiences.
//!
//! # Example
//!
//! ```rust
//! use cvd_ops::deuteranope::simulate_pixel;
//!
//! let out = simulate_pixel([200, 50, 50]);
//! assert!(out[0].abs_diff(152) <= 1);
//! assert!(out[1].abs_diff(117) <= 1);
//! assert!(out[2].abs_diff(36) <= 1);
//! ```

use cvd_color::{decode_pixel, encode_pixel, linear_rgb_to_lms, lms_to_linear_rgb, Lms};
use cvd_core::{PixelBuffer, Rgb8};

/// Weights of (L, S) for the rebuilt M response when `S <= L`.
pub const M_FROM_LS_WARM: (f32, f32) = (0.82781, 0.17216);

/// Weights of (L, S) for the rebuilt M response when `S > L`.
pub const M_FROM_LS_COOL: (f32, f32) = (0.81951, 0.18046);

/// Replaces the M response with a blend of L and S.
#[inline]
pub fn collapse_m(cones: Lms) -> Lms {
    let (wl, ws) = if cones.s <= cones.l {
        M_FROM_LS_WARM
    } else {
        M_FROM_LS_COOL
    };
    cones.with_m(wl * cones.l + ws * cones.s)
}

/// Simulates deuteranopia for a single pixel.
#[inline]
pub fn simulate_pixel(px: Rgb8) -> Rgb8 {
    let cones = collapse_m(linear_rgb_to_lms(decode_pixel(px)));
    encode_pixel(lms_to_linear_rgb(cones))
}

/// Simulates deuteranopia for a whole buffer.
pub fn simulate(src: &PixelBuffer) -> PixelBuffer {
    src.map_pixels(simulate_pixel)
}

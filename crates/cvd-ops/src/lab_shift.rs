//! Reddish-content shifts in CIE Lab.
//!
//! The Dark, Blue, and Yellow filters make reds easier to tell apart for a
//! red-green color blind viewer. Each one measures how red a pixel is via
//! its a\* channel and pushes one other Lab channel by an amount that grows
//! with that redness.
//!
//! Redness is read in the 8-bit Lab encoding (`a8 = a + 128`). Pixels with
//! `a8 < 133` are left alone. From there the shift ramps linearly and
//! reaches its full size at `a8 = 164`:
//!
//! ```text
//! shift(a8) = clamp(max * (a8 - 133) / 31, range)
//! ```
//!
//! | Filter | Channel | `max` | Range |
//! |--------|---------|-------|-------|
//! | Dark   | L       | -128  | -128..=0 |
//! | Blue   | b       | -31   | -31..=0 |
//! | Yellow | b       | +31   | 0..=31 |
//!
//! Shift amounts are in 8-bit units. For b\* that is one Lab unit per step;
//! for L\* it is `100 / 255` per step.
//!
//! A pixel whose shift is zero is returned exactly as it came in, without a
//! trip through Lab.

use cvd_color::lab::L_TO_8BIT;
use cvd_color::{lab_to_rgb, rgb_to_lab, Lab};
use cvd_core::{PixelBuffer, Rgb8};

/// First encoded a\* value that receives a shift.
pub const A8_THRESHOLD: u8 = 133;

/// Encoded a\* value at which the shift reaches full size.
pub const A8_FULL: u8 = 164;

const RAMP_SPAN: f32 = (A8_FULL - A8_THRESHOLD) as f32;

/// Lab channel a shift is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftChannel {
    /// Lightness
    Lightness,
    /// Blue-yellow axis
    BlueYellow,
}

/// One of the three reddish-content shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabShift {
    /// Darkens reddish pixels.
    Dark,
    /// Pushes reddish pixels toward blue.
    Blue,
    /// Pushes reddish pixels toward yellow.
    Yellow,
}

impl LabShift {
    /// Signed shift at full strength, in 8-bit units.
    #[inline]
    pub const fn max_shift(self) -> f32 {
        match self {
            Self::Dark => -128.0,
            Self::Blue => -31.0,
            Self::Yellow => 31.0,
        }
    }

    /// Channel this shift moves.
    #[inline]
    pub const fn channel(self) -> ShiftChannel {
        match self {
            Self::Dark => ShiftChannel::Lightness,
            Self::Blue | Self::Yellow => ShiftChannel::BlueYellow,
        }
    }

    /// Shift amount for an encoded a\* value, in 8-bit units.
    ///
    /// Zero below [`A8_THRESHOLD`], `max_shift()` at or above [`A8_FULL`],
    /// linear in between.
    #[inline]
    pub fn ramp(self, a8: u8) -> f32 {
        if a8 < A8_THRESHOLD {
            return 0.0;
        }
        let max = self.max_shift();
        let raw = max * (a8 - A8_THRESHOLD) as f32 / RAMP_SPAN;
        if max < 0.0 {
            raw.clamp(max, 0.0)
        } else {
            raw.clamp(0.0, max)
        }
    }

    /// Moves a Lab color by `shift` 8-bit units along this filter's channel.
    #[inline]
    pub fn offset(self, lab: Lab, shift: f32) -> Lab {
        match self.channel() {
            ShiftChannel::Lightness => Lab {
                l: (lab.l + shift / L_TO_8BIT).clamp(0.0, 100.0),
                ..lab
            },
            ShiftChannel::BlueYellow => Lab {
                b: (lab.b + shift).clamp(-128.0, 127.0),
                ..lab
            },
        }
    }

    /// Applies the shift to a single pixel.
    pub fn shift_pixel(self, px: Rgb8) -> Rgb8 {
        let lab = rgb_to_lab(px);
        let shift = self.ramp(lab.encode_8bit().a);
        if shift == 0.0 {
            return px;
        }
        lab_to_rgb(self.offset(lab, shift))
    }

    /// Applies the shift to a whole buffer.
    pub fn apply(self, src: &PixelBuffer) -> PixelBuffer {
        src.map_pixels(move |px| self.shift_pixel(px))
    }
}

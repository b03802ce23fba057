//! The five filter kernels.
//!
//! A [`FilterKernel`] is a pure per-pixel transform over a [`PixelBuffer`].
//! Kernels are plain `Copy` values with no configuration; the same kernel
//! applied to the same buffer always produces byte-identical output.
//!
//! | Kernel | Effect |
//! |--------|--------|
//! | [`Identity`](FilterKernel::Identity) | Returns the input unchanged |
//! | [`Deuteranope`](FilterKernel::Deuteranope) | Simulates deuteranopia |
//! | [`Dark`](FilterKernel::Dark) | Darkens reddish pixels |
//! | [`Blue`](FilterKernel::Blue) | Shifts reddish pixels toward blue |
//! | [`Yellow`](FilterKernel::Yellow) | Shifts reddish pixels toward yellow |

use std::fmt;

use tracing::{debug, trace};

use cvd_core::{PixelBuffer, Rgb8};

use crate::deuteranope;
use crate::lab_shift::LabShift;

/// A per-pixel color filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKernel {
    /// No-op.
    Identity,
    /// Deuteranopia simulation in LMS space.
    Deuteranope,
    /// Darken reddish content.
    Dark,
    /// Shift reddish content toward blue.
    Blue,
    /// Shift reddish content toward yellow.
    Yellow,
}

impl FilterKernel {
    /// All kernels in registry order.
    pub const ALL: [FilterKernel; 5] = [
        Self::Identity,
        Self::Deuteranope,
        Self::Dark,
        Self::Blue,
        Self::Yellow,
    ];

    /// Public filter name, as accepted by the registry.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identity => "Original",
            Self::Deuteranope => "Deuteranope",
            Self::Dark => "Dark",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
        }
    }

    /// One-line description for listings.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Identity => "unchanged input",
            Self::Deuteranope => "simulate deuteranopia (missing green cones)",
            Self::Dark => "darken reddish content",
            Self::Blue => "shift reddish content toward blue",
            Self::Yellow => "shift reddish content toward yellow",
        }
    }

    /// The Lab shift behind this kernel, if it is one.
    pub const fn lab_shift(self) -> Option<LabShift> {
        match self {
            Self::Dark => Some(LabShift::Dark),
            Self::Blue => Some(LabShift::Blue),
            Self::Yellow => Some(LabShift::Yellow),
            Self::Identity | Self::Deuteranope => None,
        }
    }

    /// Applies the kernel to a single pixel.
    #[inline]
    pub fn apply_pixel(self, px: Rgb8) -> Rgb8 {
        match (self, self.lab_shift()) {
            (_, Some(shift)) => shift.shift_pixel(px),
            (Self::Deuteranope, None) => deuteranope::simulate_pixel(px),
            _ => px,
        }
    }

    /// Applies the kernel to a buffer, returning a new buffer of the same
    /// dimensions. The input is never modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cvd_core::PixelBuffer;
    /// use cvd_ops::FilterKernel;
    ///
    /// let src = PixelBuffer::filled(2, 2, [200, 50, 50]).unwrap();
    /// let out = FilterKernel::Identity.apply(&src);
    /// assert_eq!(out, src);
    /// ```
    pub fn apply(self, src: &PixelBuffer) -> PixelBuffer {
        let (width, height) = src.dimensions();
        trace!(width, height, filter = self.name(), "FilterKernel::apply");

        let out = match (self, self.lab_shift()) {
            (_, Some(shift)) => shift.apply(src),
            (Self::Deuteranope, None) => deuteranope::simulate(src),
            // Shares the pixel storage.
            _ => src.clone(),
        };

        debug!(width, height, filter = self.name(), "Applied filter");
        out
    }
}

impl fmt::Display for FilterKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelBuffer {
        PixelBuffer::from_fn(5, 4, |x, y| {
            [(x * 50) as u8, (y * 60) as u8, ((x + y) * 20) as u8]
        })
        .unwrap()
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = FilterKernel::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["Original", "Deuteranope", "Dark", "Blue", "Yellow"]);
        assert_eq!(FilterKernel::Blue.to_string(), "Blue");
    }

    #[test]
    fn test_identity_is_exact() {
        let src = sample();
        assert_eq!(FilterKernel::Identity.apply(&src), src);
    }

    #[test]
    fn test_geometry_preserved() {
        let src = sample();
        for k in FilterKernel::ALL {
            let out = k.apply(&src);
            assert_eq!(out.dimensions(), src.dimensions(), "{k}");
            assert_eq!(out.as_rgb().len(), src.as_rgb().len());
        }
    }

    #[test]
    fn test_deterministic() {
        let src = sample();
        for k in FilterKernel::ALL {
            assert_eq!(k.apply(&src), k.apply(&src), "{k}");
        }
    }

    #[test]
    fn test_buffer_matches_per_pixel() {
        let src = sample();
        for k in FilterKernel::ALL {
            let out = k.apply(&src);
            for y in 0..src.height() {
                for x in 0..src.width() {
                    assert_eq!(out.pixel(x, y), k.apply_pixel(src.pixel(x, y)), "{k} ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_input_untouched() {
        let src = sample();
        let copy = src.as_rgb().to_vec();
        for k in FilterKernel::ALL {
            let _ = k.apply(&src);
        }
        assert_eq!(src.as_rgb(), copy.as_slice());
    }

    #[test]
    fn test_lab_shift_mapping() {
        assert_eq!(FilterKernel::Dark.lab_shift(), Some(LabShift::Dark));
        assert_eq!(FilterKernel::Blue.lab_shift(), Some(LabShift::Blue));
        assert_eq!(FilterKernel::Yellow.lab_shift(), Some(LabShift::Yellow));
        assert_eq!(FilterKernel::Identity.lab_shift(), None);
        assert_eq!(FilterKernel::Deuteranope.lab_shift(), None);
    }

    #[test]
    fn test_lab_kernels_dispatch_to_their_shift() {
        let src = sample();
        for k in [FilterKernel::Dark, FilterKernel::Blue, FilterKernel::Yellow] {
            let shift = k.lab_shift().unwrap();
            assert_eq!(k.apply(&src), shift.apply(&src), "{k}");
            assert_eq!(k.apply_pixel([200, 50, 50]), shift.shift_pixel([200, 50, 50]));
        }
        // Reddish input must differ between the three shifts.
        let red = [200, 50, 50];
        let outs: Vec<_> = [FilterKernel::Dark, FilterKernel::Blue, FilterKernel::Yellow]
            .iter()
            .map(|k| k.apply_pixel(red))
            .collect();
        assert_ne!(outs[0], outs[1]);
        assert_ne!(outs[1], outs[2]);
    }
}

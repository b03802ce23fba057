//! Golden vector tests for the five filters.
//!
//! Reference outputs were produced by an independent double-precision
//! implementation of the same math. Rust runs in `f32`, so each channel may
//! differ by one 8-bit step.

use cvd_core::{PixelBuffer, Rgb8};
use cvd_ops::{apply_named, FilterKernel};

/// Allowed per-channel difference.
const TOLERANCE: u8 = 1;

/// `(input, Deuteranope, Dark, Blue, Yellow)`
const GOLDEN: &[(Rgb8, Rgb8, Rgb8, Rgb8, Rgb8)] = &[
    ([200, 50, 50], [152, 117, 36], [71, 0, 0], [193, 53, 101], [203, 49, 0]),
    ([50, 200, 50], [198, 154, 68], [50, 200, 50], [50, 200, 50], [50, 200, 50]),
    ([0, 0, 255], [0, 143, 253], [0, 0, 162], [0, 31, 255], [122, 0, 201]),
    ([255, 128, 0], [218, 164, 0], [103, 0, 0], [250, 129, 88], [255, 128, 0]),
    ([120, 60, 200], [0, 129, 198], [0, 0, 92], [0, 70, 254], [153, 52, 148]),
    ([230, 180, 170], [211, 192, 169], [175, 129, 119], [222, 181, 192], [236, 179, 148]),
    ([90, 30, 30], [69, 55, 26], [46, 0, 0], [82, 32, 63], [94, 29, 0]),
    ([255, 255, 0], [255, 228, 50], [255, 255, 0], [255, 255, 0], [255, 255, 0]),
];

fn assert_close(got: Rgb8, want: Rgb8, what: &str) {
    for c in 0..3 {
        assert!(
            got[c].abs_diff(want[c]) <= TOLERANCE,
            "{what}: got {got:?}, want {want:?}"
        );
    }
}

/// Lays the golden inputs out as a single-row image.
fn golden_strip() -> PixelBuffer {
    let data = GOLDEN.iter().flat_map(|g| g.0).collect();
    PixelBuffer::from_rgb(GOLDEN.len() as u32, 1, data).unwrap()
}

#[test]
fn golden_per_pixel() {
    for &(input, deut, dark, blue, yellow) in GOLDEN {
        for (kernel, want) in [
            (FilterKernel::Deuteranope, deut),
            (FilterKernel::Dark, dark),
            (FilterKernel::Blue, blue),
            (FilterKernel::Yellow, yellow),
        ] {
            assert_close(kernel.apply_pixel(input), want, &format!("{kernel} {input:?}"));
        }
        assert_eq!(FilterKernel::Identity.apply_pixel(input), input);
    }
}

#[test]
fn golden_strip_by_name() {
    let strip = golden_strip();
    for (idx, name) in ["Deuteranope", "Dark", "Blue", "Yellow"].into_iter().enumerate() {
        let out = apply_named(name, &strip).unwrap();
        for (x, g) in GOLDEN.iter().enumerate() {
            let want = [g.1, g.2, g.3, g.4][idx];
            assert_close(out.pixel(x as u32, 0), want, &format!("{name} x={x}"));
        }
    }
}

#[test]
fn golden_strip_bgr_boundary() {
    let strip = golden_strip();
    let bgr = PixelBuffer::from_bgr(strip.width(), 1, strip.to_bgr()).unwrap();
    assert_eq!(bgr, strip);

    let out = apply_named("Deuteranope", &bgr).unwrap();
    let samples = out.to_bgr();
    for (x, g) in GOLDEN.iter().enumerate() {
        let px = [samples[x * 3 + 2], samples[x * 3 + 1], samples[x * 3]];
        assert_close(px, g.1, &format!("bgr x={x}"));
    }
}

//! Immutable 8-bit RGB pixel buffer.
//!
//! [`PixelBuffer`] is the only data structure that crosses the boundary
//! between a decoder, a filter, and an encoder. It is a dense row-major grid
//! of three 8-bit samples per pixel:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! The internal order is always RGB. Decoders that produce BGR (common in
//! video and OpenCV-style pipelines) hand their samples to
//! [`PixelBuffer::from_bgr`] and read them back with
//! [`PixelBuffer::to_bgr`]; see [`ChannelOrder`].
//!
//! A buffer never changes after construction. Operations such as
//! [`PixelBuffer::map_pixels`] return a new buffer with the same geometry.
//!
//! # Usage
//!
//! ```rust
//! use cvd_core::PixelBuffer;
//!
//! let img = PixelBuffer::filled(4, 2, [200, 50, 50]).unwrap();
//! let inverted = img.map_pixels(|[r, g, b]| [255 - r, 255 - g, 255 - b]);
//!
//! assert_eq!(inverted.dimensions(), (4, 2));
//! assert_eq!(inverted.pixel(3, 1), [55, 205, 205]);
//! assert_eq!(img.pixel(3, 1), [200, 50, 50]);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::error::Error`] - Construction errors
//! - [`rayon`] - Row-parallel mapping (feature `parallel`)

use crate::pixel::{swap_rb, Rgb8, CHANNELS};
use crate::{Error, Result};
use std::sync::Arc;

/// Sample order of an interleaved 3-channel byte array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelOrder {
    /// Red, green, blue. The internal order of [`PixelBuffer`].
    #[default]
    Rgb,
    /// Blue, green, red.
    Bgr,
}

impl ChannelOrder {
    /// Returns a short lowercase name ("rgb" or "bgr").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Bgr => "bgr",
        }
    }
}

/// Dense, immutable grid of 8-bit RGB pixels.
///
/// The sample array is stored in an [`Arc`], so cloning a buffer is cheap and
/// clones compare equal channel-for-channel.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    /// Interleaved RGB samples, `width * height * 3` long
    data: Arc<[u8]>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl PixelBuffer {
    /// Creates a buffer from interleaved RGB samples.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if width or height is zero, or the
    ///   sample count overflows.
    /// - [`Error::BufferSize`] if `data.len() != width * height * 3`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cvd_core::PixelBuffer;
    ///
    /// let img = PixelBuffer::from_rgb(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
    /// assert_eq!(img.pixel(1, 0), [0, 0, 255]);
    /// ```
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(Error::buffer_size(expected, data.len()));
        }
        Ok(Self {
            data: data.into(),
            width,
            height,
        })
    }

    /// Creates a buffer from interleaved BGR samples.
    ///
    /// The samples are reordered to RGB on the way in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cvd_core::PixelBuffer;
    ///
    /// let img = PixelBuffer::from_bgr(1, 1, vec![10, 20, 30]).unwrap();
    /// assert_eq!(img.pixel(0, 0), [30, 20, 10]);
    /// assert_eq!(img.to_bgr(), vec![10, 20, 30]);
    /// ```
    pub fn from_bgr(width: u32, height: u32, mut data: Vec<u8>) -> Result<Self> {
        for px in data.chunks_exact_mut(CHANNELS) {
            px.swap(0, 2);
        }
        Self::from_rgb(width, height, data)
    }

    /// Creates a buffer from samples in the given order.
    pub fn from_samples(order: ChannelOrder, width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        match order {
            ChannelOrder::Rgb => Self::from_rgb(width, height, data),
            ChannelOrder::Bgr => Self::from_bgr(width, height, data),
        }
    }

    /// Creates a buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgb8) -> Result<Self> {
        let count = sample_count(width, height)? / CHANNELS;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self::from_rgb(width, height, data)
    }

    /// Creates a buffer by evaluating `f(x, y)` for every pixel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cvd_core::PixelBuffer;
    ///
    /// let ramp = PixelBuffer::from_fn(256, 1, |x, _| [x as u8; 3]).unwrap();
    /// assert_eq!(ramp.pixel(128, 0), [128, 128, 128]);
    /// ```
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgb8,
    {
        let expected = sample_count(width, height)?;
        let mut data = Vec::with_capacity(expected);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::from_rgb(width, height, data)
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the interleaved RGB samples.
    #[inline]
    pub fn as_rgb(&self) -> &[u8] {
        &self.data
    }

    /// Copies the samples out in BGR order.
    pub fn to_bgr(&self) -> Vec<u8> {
        let mut out = self.data.to_vec();
        for px in out.chunks_exact_mut(CHANNELS) {
            px.swap(0, 2);
        }
        out
    }

    /// Copies the samples out in the given order.
    pub fn to_samples(&self, order: ChannelOrder) -> Vec<u8> {
        match order {
            ChannelOrder::Rgb => self.data.to_vec(),
            ChannelOrder::Bgr => self.to_bgr(),
        }
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.pixel_offset(x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2]]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns the pixel at (x, y) in BGR order.
    #[inline]
    pub fn pixel_bgr(&self, x: u32, y: u32) -> Rgb8 {
        swap_rb(self.pixel(x, y))
    }

    /// Iterates over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|s| [s[0], s[1], s[2]])
    }

    /// Returns a row of samples.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row out of bounds");
        let len = self.width as usize * CHANNELS;
        let start = y as usize * len;
        &self.data[start..start + len]
    }

    /// Produces a new buffer by applying `f` to every pixel independently.
    ///
    /// Rows are processed in parallel when the `parallel` feature is
    /// enabled; the output is identical either way since `f` sees one pixel
    /// at a time.
    pub fn map_pixels<F>(&self, f: F) -> Self
    where
        F: Fn(Rgb8) -> Rgb8 + Sync + Send,
    {
        let row_len = self.width as usize * CHANNELS;
        let mut out = vec![0u8; self.data.len()];

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            out.par_chunks_mut(row_len)
                .zip(self.data.par_chunks(row_len))
                .for_each(|(dst, src)| map_row(src, dst, &f));
        }

        #[cfg(not(feature = "parallel"))]
        for (dst, src) in out.chunks_mut(row_len).zip(self.data.chunks(row_len)) {
            map_row(src, dst, &f);
        }

        Self {
            data: out.into(),
            width: self.width,
            height: self.height,
        }
    }
}

fn map_row<F>(src: &[u8], dst: &mut [u8], f: &F)
where
    F: Fn(Rgb8) -> Rgb8,
{
    for (s, d) in src.chunks_exact(CHANNELS).zip(dst.chunks_exact_mut(CHANNELS)) {
        d.copy_from_slice(&f([s[0], s[1], s[2]]));
    }
}

/// Validates geometry and returns `width * height * 3`.
fn sample_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "width and height must be > 0",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "sample count overflows"))
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("order", &ChannelOrder::Rgb.name())
            .finish()
    }
}

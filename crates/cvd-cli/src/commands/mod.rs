//! CLI command implementations

pub mod apply;
pub mod list;

use anyhow::{Context, Result};
use cvd_core::PixelBuffer;
use image::RgbImage;
use std::path::Path;

/// Decodes an image file into an RGB buffer. Alpha is dropped.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let decoded = image::open(path).with_context(|| format!("Failed to load: {}", path.display()))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    PixelBuffer::from_rgb(width, height, rgb.into_raw())
        .with_context(|| format!("Invalid image: {}", path.display()))
}

/// Encodes a buffer to disk; the format follows the file extension.
pub fn save_image(path: &Path, buffer: &PixelBuffer) -> Result<()> {
    let (width, height) = buffer.dimensions();
    let img = RgbImage::from_raw(width, height, buffer.as_rgb().to_vec())
        .context("Pixel buffer does not match its dimensions")?;
    img.save(path)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

//! Presentation-side rendering of a decoded image.
//!
//! The core hands over RGB565 pixels; this adapter expands them into an RGBA
//! raster for display and can persist it as a PNG. Missing trailing pixels
//! (dimension inference overshoot) render as opaque black, matching the BMP
//! encoder.

use std::path::Path;

use anyhow::{Context, Result};

use hexel_core::{ImageData, Rgb888};

/// Renders the image into a tightly packed RGBA byte buffer, row-major,
/// top-down, alpha fixed at 255.
#[must_use]
pub fn render_rgba(img: &ImageData) -> Vec<u8> {
    let width = img.width as usize;
    let height = img.height as usize;
    let mut out = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let rgb = match img.data.get(y * width + x) {
                Some(&c) => Rgb888::from_rgb565(c),
                None => Rgb888::BLACK,
            };
            out.extend_from_slice(&[rgb.r, rgb.g, rgb.b, 255]);
        }
    }
    out
}

pub fn save_png(img: &ImageData, path: &Path) -> Result<()> {
    let raster = image::RgbaImage::from_raw(img.width, img.height, render_rgba(img))
        .context("Preview raster size mismatch")?;
    raster
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write preview: {}", path.display()))?;
    Ok(())
}

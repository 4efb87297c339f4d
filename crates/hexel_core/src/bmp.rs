//! Byte-exact 24-bit BMP serialization.
//!
//! Layout: 14-byte file header, 40-byte BITMAPINFOHEADER, then bottom-up
//! rows of BGR pixels padded to 4-byte boundaries. Everything little-endian.

use crate::color::Rgb888;
use crate::types::ImageData;

pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
pub const BITS_PER_PIXEL: u16 = 24;

/// 2835 pixels per meter, ~72 DPI.
const RESOLUTION_PPM: i32 = 2835;

/// Zero bytes appended to each row so rows start on 4-byte boundaries.
#[inline]
#[must_use]
pub const fn row_padding(width: u32) -> u32 {
    (4 - (width * 3) % 4) % 4
}

/// Serializes `image` into a complete BMP file.
///
/// Never fails for `width, height >= 1`. Pixel indices beyond the end of the
/// data (possible when dimension inference overshoots) are written as black.
#[must_use]
pub fn encode(image: &ImageData) -> Vec<u8> {
    let width = image.width;
    let height = image.height;
    let padding = row_padding(width);
    let row_size = width * 3 + padding;
    let image_size = row_size * height;
    let file_size = PIXEL_DATA_OFFSET + image_size;

    let mut buf = Vec::with_capacity(file_size as usize);

    // File header.
    buf.extend_from_slice(&0x4D42u16.to_le_bytes()); // "BM"
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes()); // reserved
    buf.extend_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

    // Info header. Positive height selects bottom-up row order.
    buf.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    buf.extend_from_slice(&(width as i32).to_le_bytes());
    buf.extend_from_slice(&(height as i32).to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes()); // color planes
    buf.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes()); // no compression
    buf.extend_from_slice(&image_size.to_le_bytes());
    buf.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    buf.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes()); // palette colors
    buf.extend_from_slice(&0u32.to_le_bytes()); // important colors

    // Pixel rows, bottom to top; BGR within each pixel.
    for y in (0..height).rev() {
        for x in 0..width {
            let idx = (y as usize) * (width as usize) + x as usize;
            let rgb = match image.data.get(idx) {
                Some(&c) => Rgb888::from_rgb565(c),
                None => Rgb888::BLACK,
            };
            buf.extend_from_slice(&[rgb.b, rgb.g, rgb.r]);
        }
        buf.extend(std::iter::repeat(0u8).take(padding as usize));
    }

    debug_assert_eq!(buf.len(), file_size as usize);
    buf
}

//! End-to-end conversion: raw source text to a decoded image and BMP bytes.

use tracing::debug;

use crate::error::Result;
use crate::types::ImageData;
use crate::{bmp, dimensions, extract, parse};

/// The result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub image: ImageData,
    pub bmp: Vec<u8>,
}

/// Converts loosely structured source text into an image and its BMP encoding.
///
/// Pure and deterministic: identical input yields byte-identical output, each
/// call owns its own data, and concurrent calls need no synchronization.
/// Fails with a typed [`CoreError`](crate::CoreError) from the extraction or
/// parsing stage; dimension resolution and encoding cannot fail for a
/// non-empty pixel sequence.
pub fn convert(text: &str) -> Result<Conversion> {
    let block = extract::extract(text)?;
    let pixels = parse::parse_hex_values(&block.block)?;
    let (width, height) = dimensions::resolve(pixels.len());

    let image = ImageData {
        width,
        height,
        data: pixels,
        name: block.name,
    };
    debug!(
        name = %image.name,
        width,
        height,
        pixels = image.pixel_count(),
        "decoded pixel array"
    );

    let bmp = bmp::encode(&image);
    Ok(Conversion { image, bmp })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    #[test]
    fn convert_builds_image_and_bmp() {
        let conversion =
            convert("const uint16_t dot[] = {0xF800, 0x07E0, 0x001F, 0xFFFF};").unwrap();
        assert_eq!(conversion.image.name, "dot");
        assert_eq!(conversion.image.width, 2);
        assert_eq!(conversion.image.height, 2);
        assert_eq!(&conversion.bmp[0..2], b"BM");
    }

    #[test]
    fn convert_is_idempotent() {
        let text = "uint16_t strip[] = {0x0000, 0x1111, 0x2222};";
        assert_eq!(convert(text).unwrap().bmp, convert(text).unwrap().bmp);
    }

    #[test]
    fn failure_is_typed() {
        assert_eq!(convert("nothing here").unwrap_err(), CoreError::NoHexValuesFound);
    }
}

/// A decoded pixel array together with its inferred shape.
///
/// `width * height == data.len()` is the target but is not enforced: when no
/// exact dimension pair is found the resolver degrades to a single row, and
/// callers constructing `ImageData` by hand may undershoot. The BMP encoder
/// fills any missing trailing pixels with black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u16>,
    pub name: String,
}

impl ImageData {
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_count_matches_data_length() {
        let image = ImageData {
            width: 2,
            height: 2,
            data: vec![0xF800, 0x07E0, 0x001F, 0xFFFF],
            name: "icon".into(),
        };
        assert_eq!(image.pixel_count(), 4);
    }
}

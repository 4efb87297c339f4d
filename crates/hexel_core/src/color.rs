/// A 24-bit RGB color expanded from a packed RGB565 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb888 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb888 {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Expands a packed RGB565 value (5 bits red, 6 bits green, 5 bits blue,
    /// red in the high bits) to 8 bits per channel. The high-order bits are
    /// replicated into the low-order gap instead of zero-padded, so full-scale
    /// channel values map to 255 rather than 248/252.
    #[inline]
    #[must_use]
    pub const fn from_rgb565(c: u16) -> Self {
        let r5 = ((c >> 11) & 0x1F) as u8;
        let g6 = ((c >> 5) & 0x3F) as u8;
        let b5 = (c & 0x1F) as u8;
        Self {
            r: (r5 << 3) | (r5 >> 2),
            g: (g6 << 2) | (g6 >> 4),
            b: (b5 << 3) | (b5 >> 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_expand_to_full_scale() {
        assert_eq!(Rgb888::from_rgb565(0xF800), Rgb888 { r: 255, g: 0, b: 0 });
        assert_eq!(Rgb888::from_rgb565(0x07E0), Rgb888 { r: 0, g: 255, b: 0 });
        assert_eq!(Rgb888::from_rgb565(0x001F), Rgb888 { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn black_and_white_are_exact() {
        assert_eq!(Rgb888::from_rgb565(0x0000), Rgb888::BLACK);
        assert_eq!(
            Rgb888::from_rgb565(0xFFFF),
            Rgb888 {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn mid_gray_replicates_high_bits() {
        // r5 = g6 = b5 = 0b10000
        let c = (0x10 << 11) | (0x10 << 5) | 0x10;
        let rgb = Rgb888::from_rgb565(c);
        assert_eq!(rgb.r, 0x84);
        assert_eq!(rgb.g, 0x41);
        assert_eq!(rgb.b, 0x84);
    }

    #[test]
    fn channels_are_monotonic_in_packed_value() {
        let mut prev = Rgb888::from_rgb565(0);
        for r5 in 1..32u16 {
            let cur = Rgb888::from_rgb565(r5 << 11);
            assert!(cur.r > prev.r);
            prev = cur;
        }
    }
}

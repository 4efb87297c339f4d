//! Turns an extracted candidate block into an ordered RGB565 pixel sequence.

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::extract::HEX_TOKEN;

/// Parses `block` into 16-bit pixel values, in order of appearance and with
/// duplicates kept (this is pixel data, not a set).
///
/// The primary pass takes every `0x`-prefixed token of 1-4 hex digits. Only
/// when that yields nothing does the fallback pass run: split on commas and
/// whitespace, strip non-hex-digit characters from each token, and accept
/// cleaned tokens of 3-4 digits. The fallback recovers arrays written without
/// the `0x` prefix or with trailing punctuation.
pub fn parse_hex_values(block: &str) -> Result<Vec<u16>> {
    let mut values = parse_prefixed(block);
    if values.is_empty() {
        values = parse_bare(block);
        if !values.is_empty() {
            debug!(count = values.len(), "recovered values without 0x prefix");
        }
    } else {
        debug!(count = values.len(), "parsed 0x-prefixed values");
    }

    if values.is_empty() {
        return Err(CoreError::NoValidHexValues);
    }
    Ok(values)
}

fn parse_prefixed(block: &str) -> Vec<u16> {
    HEX_TOKEN
        .find_iter(block)
        .filter_map(|m| u16::from_str_radix(&m.as_str()[2..], 16).ok())
        .collect()
}

fn parse_bare(block: &str) -> Vec<u16> {
    block
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|token| {
            let cleaned: String = token.chars().filter(char::is_ascii_hexdigit).collect();
            if (3..=4).contains(&cleaned.len()) {
                u16::from_str_radix(&cleaned, 16).ok()
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_values_in_order() {
        let values = parse_hex_values("0xF800, 0x07E0, 0x001F, 0xFFFF").unwrap();
        assert_eq!(values, vec![0xF800, 0x07E0, 0x001F, 0xFFFF]);
    }

    #[test]
    fn duplicates_are_kept() {
        let values = parse_hex_values("0x1234, 0x1234, 0x1234").unwrap();
        assert_eq!(values, vec![0x1234, 0x1234, 0x1234]);
    }

    #[test]
    fn short_tokens_and_mixed_case() {
        let values = parse_hex_values("0x1, 0Xab, 0xAbCd").unwrap();
        assert_eq!(values, vec![0x1, 0xAB, 0xABCD]);
    }

    #[test]
    fn bare_values_recovered_when_no_prefix() {
        let values = parse_hex_values("F800, 07E0,\n001F;").unwrap();
        assert_eq!(values, vec![0xF800, 0x07E0, 0x001F]);
    }

    #[test]
    fn bare_pass_ignored_when_prefixed_values_exist() {
        // The fallback would also pick up `ABCD`, but the primary pass found
        // a value so the fallback never runs.
        let values = parse_hex_values("0x0001 ABCD").unwrap();
        assert_eq!(values, vec![0x0001]);
    }

    #[test]
    fn bare_tokens_of_wrong_length_are_dropped() {
        assert_eq!(
            parse_hex_values("AB, ABCDE, 12"),
            Err(CoreError::NoValidHexValues)
        );
    }

    #[test]
    fn empty_block_fails() {
        assert_eq!(parse_hex_values(""), Err(CoreError::NoValidHexValues));
        assert_eq!(parse_hex_values("no digits"), Err(CoreError::NoValidHexValues));
    }
}

//! Locates the pixel-array candidate inside loosely structured source text.
//!
//! Extraction never tries to understand C — it only needs to find the most
//! plausible run of hex literals. Three strategies are tried in order, each a
//! pure function returning the first match; hard failure happens only when
//! the whole document contains no `0x` token at all.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{CoreError, Result};

/// A hex literal: `0x` followed by 1-4 hex digits.
pub(crate) static HEX_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0[xX][0-9a-fA-F]{1,4}").unwrap());

/// A full array declaration: optional `const`, a 16-bit unsigned type token,
/// an identifier, an optional bracketed size, an optional `PROGMEM` qualifier,
/// `=`, and a brace-delimited value list.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:const\s+)?(?:unsigned\s+short|uint16_t|u16)\s+([A-Za-z_]\w*)\s*(?:\[[^\]]*\])?\s*(?:PROGMEM\s+)?=\s*\{([^{}]*)\}",
    )
    .unwrap()
});

static BRACE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());

/// The substring judged to contain the pixel array, plus the declared array
/// identifier (or a synthetic placeholder when no declaration was found).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock {
    pub name: String,
    pub block: String,
}

type Strategy = fn(&str) -> Option<ExtractedBlock>;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("declaration", match_declaration),
    ("brace block", match_brace_block),
    ("loose scan", collect_loose_tokens),
];

/// Returns the best candidate block, trying each strategy in order.
///
/// Fails with [`CoreError::NoHexValuesFound`] only when not a single hex
/// token exists anywhere in the text; any weaker failure (a candidate that
/// parses to nothing) is deferred to the parser stage.
pub fn extract(text: &str) -> Result<ExtractedBlock> {
    for &(label, strategy) in STRATEGIES {
        if let Some(found) = strategy(text) {
            debug!(strategy = label, name = %found.name, "extracted candidate block");
            return Ok(found);
        }
    }
    Err(CoreError::NoHexValuesFound)
}

fn match_declaration(text: &str) -> Option<ExtractedBlock> {
    DECLARATION.captures(text).map(|caps| ExtractedBlock {
        name: caps[1].to_string(),
        block: caps[2].to_string(),
    })
}

fn match_brace_block(text: &str) -> Option<ExtractedBlock> {
    // Flatten line breaks so the brace pattern matches without multi-line
    // handling; brace contents never contain nested braces we care about.
    let flat = text.replace(['\r', '\n'], " ");
    for caps in BRACE_BLOCK.captures_iter(&flat) {
        let contents = &caps[1];
        if HEX_TOKEN.is_match(contents) {
            return Some(ExtractedBlock {
                name: "parsed_array".to_string(),
                block: contents.to_string(),
            });
        }
    }
    None
}

fn collect_loose_tokens(text: &str) -> Option<ExtractedBlock> {
    let tokens: Vec<&str> = HEX_TOKEN.find_iter(text).map(|m| m.as_str()).collect();
    if tokens.is_empty() {
        return None;
    }
    Some(ExtractedBlock {
        name: "extracted_hex_values".to_string(),
        block: tokens.join(", "),
    })
}

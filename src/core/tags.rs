//! Hashtag extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([\w-]+)").unwrap_or_else(|e| panic!("Invalid tag regex: {e}")));

/// Extract all `#tag` tokens from the input.
///
/// Returns the text with every tag token (including the leading `#`)
/// removed, plus the tags in order of first appearance. Duplicates are
/// retained; deduplication is a caller concern. No whitespace cleanup
/// happens here.
#[must_use]
pub fn extract_tags(input: &str) -> (String, Vec<String>) {
    let mut tags = Vec::new();
    for caps in TAG_PATTERN.captures_iter(input) {
        if let Some(tag) = caps.get(1) {
            tags.push(tag.as_str().to_string());
        }
    }
    let stripped = TAG_PATTERN.replace_all(input, "").to_string();
    (stripped, tags)
}

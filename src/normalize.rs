//! Name normalization
//!
//! Entity names in documents and the roster differ in casing and punctuation
//! ("Northstar Logistics Inc." vs "northstar logistics inc"). Normalization
//! removes those differences without discarding word content.

/// Normalize a raw name for comparison.
///
/// Lowercases, drops every character that is not a letter, digit, underscore
/// or whitespace, collapses whitespace runs to a single space, and trims.
/// Pure, total, and idempotent: empty input yields empty output.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Shared text normalization for header resolution, catalog matching,
//! identity resolution and status derivation: trim, lowercase, collapse
//! internal whitespace to single spaces.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Normalize free text for comparison.
pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").to_lowercase()
}

/// Normalize and drop every occurrence of `token` as a whole word,
/// re-collapsing the remainder.
pub fn normalize_without_token(text: &str, token: &str) -> String {
    let normalized = normalize(text);
    normalized
        .split(' ')
        .filter(|word| !word.is_empty() && *word != token)
        .collect::<Vec<_>>()
        .join(" ")
}

//! Free-text size label resolution against the tenant catalog.
//!
//! Operators type whatever their old system printed ("8yd skip", "8 yard")
//! and it must land on a fixed catalog entry without exact spelling. Tiers,
//! first success wins:
//! - exact: normalized label equals a normalized catalog name
//! - contains: one compacted form is a substring of the other; the first
//!   catalog entry in list order wins (list order IS the tie-break)
//! - none
//!
//! Substring matching is a deliberate low-precision fallback; a similarity
//! score tier would slot between exact and contains if ever needed.

use crate::domain::import::{CatalogEntry, CatalogMatch};
use crate::shared::normalize::normalize_without_token;

/// The word operators use for the container unit; carries no meaning for
/// matching ("8 yard skip" and "8 yard" are the same size).
const UNIT_TOKEN: &str = "skip";

/// Unit spellings folded to a single form before the contains comparison,
/// so "8yd" finds "8 Yard Skip".
const UNIT_SYNONYMS: [(&str, &str); 3] = [("yards", "yd"), ("yard", "yd"), ("yds", "yd")];

pub struct CatalogMatcher {
    entries: Vec<CatalogEntry>,
    normalized: Vec<String>,
    compacted: Vec<String>,
}

impl CatalogMatcher {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let normalized = entries.iter().map(|e| normalize_label(&e.name)).collect();
        let compacted = entries.iter().map(|e| compact_label(&e.name)).collect();
        Self {
            entries,
            normalized,
            compacted,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Resolve a free-text size label. Total: always returns exactly one of
    /// exact / contains / none, with an entry id iff matched.
    pub fn match_label(&self, label: &str) -> CatalogMatch {
        let needle = normalize_label(label);
        if needle.is_empty() {
            return CatalogMatch::none();
        }

        if let Some(m) = self.try_exact(&needle) {
            return m;
        }

        if let Some(m) = self.try_contains(&needle, &compact_label(label)) {
            return m;
        }

        CatalogMatch::none()
    }

    fn try_exact(&self, needle: &str) -> Option<CatalogMatch> {
        for (i, name) in self.normalized.iter().enumerate() {
            if name == needle {
                return Some(CatalogMatch::exact(&self.entries[i]));
            }
        }
        None
    }

    fn try_contains(&self, needle: &str, compact_needle: &str) -> Option<CatalogMatch> {
        for i in 0..self.entries.len() {
            let name = &self.normalized[i];
            let compact_name = &self.compacted[i];
            if name.is_empty() || compact_name.is_empty() {
                continue;
            }

            if name.contains(needle) || needle.contains(name.as_str()) {
                return Some(CatalogMatch::contains(&self.entries[i]));
            }

            if compact_name.contains(compact_needle) || compact_needle.contains(compact_name.as_str())
            {
                return Some(CatalogMatch::contains(&self.entries[i]));
            }
        }
        None
    }
}

/// Normalization shared by both sides: lowercase, collapse whitespace,
/// drop the unit token, re-collapse, trim. This is also the spelling
/// unmatched labels are tallied under.
pub fn normalize_label(label: &str) -> String {
    normalize_without_token(label, UNIT_TOKEN)
}

/// Contains-tier form: unit synonyms folded, whitespace removed.
fn compact_label(label: &str) -> String {
    normalize_label(label)
        .split(' ')
        .map(|word| {
            UNIT_SYNONYMS
                .iter()
                .find(|(from, _)| *from == word)
                .map(|(_, to)| *to)
                .unwrap_or(word)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::import::MatchMethod;

    fn entry(id: &str, name: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn matcher(names: &[(&str, &str)]) -> CatalogMatcher {
        CatalogMatcher::new(names.iter().map(|(id, name)| entry(id, name)).collect())
    }

    #[test]
    fn test_exact_match_ignores_case_spacing_and_unit_word() {
        let m = matcher(&[("a", "8 Yard Skip")]);
        let result = m.match_label("8  YARD");
        assert_eq!(result.method, MatchMethod::Exact);
        assert_eq!(result.entry_id.as_deref(), Some("a"));
        assert_eq!(result.matched_name.as_deref(), Some("8 Yard Skip"));
    }

    #[test]
    fn test_shorthand_label_matches_by_contains() {
        let m = matcher(&[("a", "8 Yard Skip")]);
        let result = m.match_label("8yd");
        assert_eq!(result.method, MatchMethod::Contains);
        assert_eq!(result.entry_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_wrong_size_does_not_match() {
        let m = matcher(&[("b", "12 Yard Skip")]);
        let result = m.match_label("8yd");
        assert_eq!(result.method, MatchMethod::None);
        assert!(result.entry_id.is_none());
        assert!(result.matched_name.is_none());
    }

    #[test]
    fn test_label_with_extra_words_contains_catalog_name() {
        let m = matcher(&[("a", "8 Yard")]);
        let result = m.match_label("8 yard builders skip");
        assert_eq!(result.method, MatchMethod::Contains);
    }

    #[test]
    fn test_catalog_order_is_the_contains_tie_break() {
        // Both entries could plausibly match "12 yard"; the first listed
        // entry wins regardless of name length or specificity.
        let m = matcher(&[("first", "12 Yard Open Skip"), ("second", "12 Yard")]);
        let result = m.match_label("12yd open");
        assert_eq!(result.method, MatchMethod::Contains);
        assert_eq!(result.entry_id.as_deref(), Some("first"));
    }

    #[test]
    fn test_exact_beats_contains() {
        let m = matcher(&[("open", "8 Yard Open Skip"), ("plain", "8 Yard Skip")]);
        let result = m.match_label("8 yard");
        assert_eq!(result.method, MatchMethod::Exact);
        assert_eq!(result.entry_id.as_deref(), Some("plain"));
    }

    #[test]
    fn test_blank_or_unit_only_labels_never_match() {
        let m = matcher(&[("a", "8 Yard Skip")]);
        assert_eq!(m.match_label("").method, MatchMethod::None);
        assert_eq!(m.match_label("   ").method, MatchMethod::None);
        assert_eq!(m.match_label("skip").method, MatchMethod::None);
    }

    #[test]
    fn test_matcher_is_total_over_any_label() {
        let m = matcher(&[("a", "8 Yard Skip"), ("b", "12 Yard Skip")]);
        for label in ["8yd", "12 yard", "grab lorry", "", "SKIP"] {
            let result = m.match_label(label);
            assert_eq!(result.entry_id.is_some(), result.method != MatchMethod::None);
        }
    }

    #[test]
    fn test_normalize_label_is_the_tally_spelling() {
        assert_eq!(normalize_label("8yd Skip"), "8yd");
        assert_eq!(normalize_label("  8   YARD  "), "8 yard");
    }
}

// ============================================================
// HEADER RESOLVER
// ============================================================
// Map the literal header row onto canonical fields via the alias table

use std::collections::HashMap;

use crate::domain::import::{CanonicalField, HeaderMap};
use crate::shared::normalize::normalize;

/// Resolve the header row to a `HeaderMap`.
///
/// Headers are compared after trim/lowercase/whitespace-collapse. For each
/// canonical field the alias list is tried in order and the first alias with
/// a match wins. When two raw headers normalize to the same string, the
/// first occurrence in file order is authoritative. A field with no alias
/// match is simply absent; per-row validation decides whether that matters.
pub fn resolve_headers(header_row: &[String]) -> HeaderMap {
    let mut by_normalized: HashMap<String, (usize, &String)> = HashMap::new();
    for (index, literal) in header_row.iter().enumerate() {
        let key = normalize(literal);
        if key.is_empty() {
            continue;
        }
        by_normalized.entry(key).or_insert((index, literal));
    }

    let mut map = HeaderMap::default();
    map.source_headers = header_row.to_vec();

    for field in CanonicalField::ALL {
        for alias in field.aliases() {
            if let Some(&(index, literal)) = by_normalized.get(*alias) {
                map.insert(field, index, literal.clone());
                break;
            }
        }
    }

    map
}

// ============================================================
// ROW PROJECTOR
// ============================================================
// Reshape one grid data row into a canonical ImportRow

use std::collections::HashMap;

use crate::domain::import::{CanonicalField, HeaderMap, ImportRow};

/// Project a data row onto the canonical field set.
///
/// Pure reshape: no validation, no catalog or identity work. Fields whose
/// header was not resolved, and cells the (possibly ragged) row does not
/// reach, become empty strings.
pub fn project_row(row_no: usize, cells: &[String], headers: &HeaderMap) -> ImportRow {
    let mut values: HashMap<CanonicalField, String> = HashMap::new();
    for field in CanonicalField::ALL {
        let value = headers
            .get(field)
            .and_then(|col| cells.get(col.index))
            .cloned()
            .unwrap_or_default();
        values.insert(field, value);
    }

    let raw: HashMap<String, String> = headers
        .source_headers
        .iter()
        .enumerate()
        .map(|(index, literal)| {
            (
                literal.clone(),
                cells.get(index).cloned().unwrap_or_default(),
            )
        })
        .collect();

    ImportRow::new(row_no, values, raw)
}

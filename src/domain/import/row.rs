// ============================================================
// IMPORT ROW TYPES
// ============================================================
// Data structures flowing through the import reconciliation pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::CanonicalField;

/// Raw decoded spreadsheet content: row 0 is the header row, everything
/// after it is data. Cells are plain strings; nothing is interpreted yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGrid {
    pub rows: Vec<Vec<String>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// The literal header row, if the grid has one.
    pub fn header_row(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// All rows after the header, in file order.
    pub fn data_rows(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Where a canonical field was found in the file: column position plus the
/// literal header text, kept for user-facing messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderColumn {
    pub index: usize,
    pub literal: String,
}

/// Mapping from canonical field to the source column that supplies it.
/// Built once per file; fields with no alias match are simply absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderMap {
    columns: HashMap<CanonicalField, HeaderColumn>,

    /// The literal header row as found in the file, in column order.
    /// Kept so projected rows can carry their raw cell mapping for audit.
    pub source_headers: Vec<String>,
}

impl HeaderMap {
    pub fn insert(&mut self, field: CanonicalField, index: usize, literal: String) {
        self.columns.insert(field, HeaderColumn { index, literal });
    }

    pub fn get(&self, field: CanonicalField) -> Option<&HeaderColumn> {
        self.columns.get(&field)
    }

    pub fn is_resolved(&self, field: CanonicalField) -> bool {
        self.columns.contains_key(&field)
    }

    /// Number of canonical fields that found a source column.
    pub fn resolved_count(&self) -> usize {
        self.columns.len()
    }
}

/// One canonical booking record projected from a data row.
///
/// Every canonical field is present with a string value (empty when the
/// source column is missing or blank) — downstream stages assume
/// string-or-empty, never a missing key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRow {
    /// 1-based row index in the source file, header row included.
    pub row_no: usize,

    /// Canonical field values, complete over `CanonicalField::ALL`.
    pub values: HashMap<CanonicalField, String>,

    /// Original cells keyed by their literal header, kept for audit.
    pub raw: HashMap<String, String>,
}

impl ImportRow {
    pub fn new(
        row_no: usize,
        mut values: HashMap<CanonicalField, String>,
        raw: HashMap<String, String>,
    ) -> Self {
        for field in CanonicalField::ALL {
            values.entry(field).or_default();
        }
        Self { row_no, values, raw }
    }

    /// Value for a canonical field. Total by construction.
    pub fn get(&self, field: CanonicalField) -> &str {
        self.values.get(&field).map(|v| v.as_str()).unwrap_or("")
    }

    /// Trimmed value, empty string when the cell is blank.
    pub fn trimmed(&self, field: CanonicalField) -> &str {
        self.get(field).trim()
    }
}

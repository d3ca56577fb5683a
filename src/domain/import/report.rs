// ============================================================
// IMPORT ANALYSIS REPORT
// ============================================================
// The dry-run artifact handed to the presentation layer

use serde::{Deserialize, Serialize};

use super::{BookingStatus, CatalogMatch, ImportRow};

/// One problem found on one row. Non-fatal: issues accumulate, they never
/// abort processing of later rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// 1-based row index in the source file (header row is row 1).
    pub row_no: usize,

    /// Canonical field name or rule identifier the issue refers to.
    pub field_or_rule: String,

    /// Operator-facing message.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(row_no: usize, field_or_rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row_no,
            field_or_rule: field_or_rule.into(),
            message: message.into(),
        }
    }
}

/// A size label no catalog entry matched, tallied by normalized spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownLabel {
    pub label: String,
    pub count: usize,
}

/// A preview row annotated with the derived status, catalog match and the
/// resolved delivery date (ISO) so the dry-run table renders without
/// re-deriving anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRow {
    pub row: ImportRow,
    pub status: BookingStatus,
    pub catalog: CatalogMatch,
    pub delivery_date: Option<String>,
}

/// The final dry-run artifact. Derived entirely from the projected rows
/// plus the catalog snapshot and recomputed in full on every run; nothing
/// here is mutated incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportAnalysis {
    /// Number of data rows in the file.
    pub total_rows: usize,

    /// Distinct customers by identity key.
    pub unique_customer_count: usize,

    /// Distinct non-empty job numbers.
    pub job_count: usize,

    /// Issue lists grouped per invalid row, in file order.
    pub invalid_rows: Vec<Vec<ValidationIssue>>,

    /// Unmatched size labels with occurrence counts, first-seen order.
    pub unknown_catalog_labels: Vec<UnknownLabel>,

    /// First rows of the file, capped, annotated for display.
    pub preview_rows: Vec<PreviewRow>,

    /// All-or-nothing readiness gate: non-empty row set, zero row issues,
    /// zero unknown labels. Partial import is never offered here.
    pub ready_to_import: bool,
}

impl ImportAnalysis {
    pub fn issue_count(&self) -> usize {
        self.invalid_rows.iter().map(|r| r.len()).sum()
    }
}

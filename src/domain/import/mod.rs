// ============================================================
// IMPORT DOMAIN LAYER
// ============================================================
// Core types and value objects for bulk booking import reconciliation
// No I/O, no async, no external dependencies

mod analysis_config;
mod catalog;
mod field;
mod report;
mod row;
mod status;

pub use analysis_config::AnalysisConfig;
pub use catalog::{CatalogEntry, CatalogMatch, MatchMethod};
pub use field::CanonicalField;
pub use report::{ImportAnalysis, PreviewRow, UnknownLabel, ValidationIssue};
pub use row::{HeaderColumn, HeaderMap, ImportRow, RawGrid};
pub use status::BookingStatus;

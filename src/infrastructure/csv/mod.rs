// ============================================================
// CSV INFRASTRUCTURE
// ============================================================
// File-shape stages of the import pipeline: decode, resolve headers,
// project rows. Everything downstream works on domain types only.

pub mod header_resolver;
pub mod row_projector;
pub mod tabular_decoder;

pub use header_resolver::resolve_headers;
pub use row_projector::project_row;
pub use tabular_decoder::{decode_text, detect_delimiter, serialize_grid, TabularDecoder};

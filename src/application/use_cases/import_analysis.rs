//! Bulk booking import reconciliation.
//!
//! Composes the pipeline: decode -> resolve headers -> project rows ->
//! match / identify / triage / validate -> aggregate. Strictly a dry run:
//! the output is a report, nothing is written to the store. Given the same
//! file bytes and the same catalog snapshot the whole pass is a pure
//! function; re-running after a catalog change reflects the new catalog
//! because nothing is cached between invocations.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::application::use_cases::catalog_matcher::{normalize_label, CatalogMatcher};
use crate::application::use_cases::identity_resolver::resolve_identity;
use crate::application::use_cases::row_validator::validate_row;
use crate::application::use_cases::status_deriver::derive_status;
use crate::domain::error::Result;
use crate::domain::import::{
    AnalysisConfig, CanonicalField, CatalogEntry, ImportAnalysis, ImportRow, PreviewRow, RawGrid,
    UnknownLabel,
};
use crate::infrastructure::csv::{project_row, resolve_headers, TabularDecoder};
use crate::infrastructure::db::catalog::CatalogProvider;
use crate::shared::{dates, normalize::normalize};

pub struct ImportAnalysisUseCase {
    catalog: Arc<dyn CatalogProvider>,
    config: AnalysisConfig,
}

impl ImportAnalysisUseCase {
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: AnalysisConfig) -> Self {
        Self { catalog, config }
    }

    /// Analyze an uploaded file for a tenant. The catalog fetch is the one
    /// asynchronous boundary; a fetch failure halts the run with a
    /// `CatalogError` rather than analyzing against an empty catalog.
    pub async fn analyze_bytes(&self, tenant_id: Uuid, bytes: &[u8]) -> Result<ImportAnalysis> {
        let grid = TabularDecoder::from_config(&self.config).decode_bytes(bytes)?;
        let entries = self.catalog.fetch_catalog(tenant_id).await?;
        info!(
            tenant = %tenant_id,
            rows = grid.data_rows().len(),
            catalog_entries = entries.len(),
            "Analyzing booking import"
        );
        Ok(self.analyze_grid(&grid, &entries))
    }

    /// Analyze already-decoded text (the HTTP layer posts text bodies).
    pub async fn analyze_text(&self, tenant_id: Uuid, content: &str) -> Result<ImportAnalysis> {
        let grid = TabularDecoder::from_config(&self.config).decode(content)?;
        let entries = self.catalog.fetch_catalog(tenant_id).await?;
        info!(
            tenant = %tenant_id,
            rows = grid.data_rows().len(),
            catalog_entries = entries.len(),
            "Analyzing booking import"
        );
        Ok(self.analyze_grid(&grid, &entries))
    }

    /// The synchronous core: grid + catalog snapshot -> report.
    pub fn analyze_grid(&self, grid: &RawGrid, entries: &[CatalogEntry]) -> ImportAnalysis {
        let header_row = grid.header_row().unwrap_or(&[]);
        let headers = resolve_headers(header_row);
        debug!(
            resolved = headers.resolved_count(),
            columns = header_row.len(),
            "Resolved headers"
        );

        let rows: Vec<ImportRow> = grid
            .data_rows()
            .iter()
            .enumerate()
            .map(|(i, cells)| project_row(i + 2, cells, &headers))
            .collect();

        self.aggregate(&rows, entries)
    }

    /// Validate every row independently and fold the results into the
    /// report. Counts and sets are order-independent; the preview and the
    /// unknown-label list preserve file order.
    fn aggregate(&self, rows: &[ImportRow], entries: &[CatalogEntry]) -> ImportAnalysis {
        let matcher = CatalogMatcher::new(entries.to_vec());

        let mut customers: HashSet<String> = HashSet::new();
        let mut jobs: HashSet<String> = HashSet::new();
        let mut invalid_rows = Vec::new();
        let mut unknown_labels: Vec<UnknownLabel> = Vec::new();
        let mut preview_rows = Vec::new();

        for row in rows {
            let issues = validate_row(row);
            let catalog_match = matcher.match_label(row.get(CanonicalField::SkipSize));

            if !catalog_match.is_matched() {
                let label = normalize_label(row.get(CanonicalField::SkipSize));
                // A blank size is already a required-field issue; only
                // actual spellings are tallied.
                if !label.is_empty() {
                    match unknown_labels.iter_mut().find(|u| u.label == label) {
                        Some(existing) => existing.count += 1,
                        None => unknown_labels.push(UnknownLabel { label, count: 1 }),
                    }
                }
            }

            customers.insert(resolve_identity(row));

            let job = normalize(row.get(CanonicalField::JobNo));
            if !job.is_empty() {
                jobs.insert(job);
            }

            if preview_rows.len() < self.config.preview_cap {
                preview_rows.push(PreviewRow {
                    status: derive_status(row),
                    catalog: catalog_match,
                    delivery_date: dates::parse_flexible(row.get(CanonicalField::DeliveryDate))
                        .map(dates::to_iso),
                    row: row.clone(),
                });
            }

            if !issues.is_empty() {
                invalid_rows.push(issues);
            }
        }

        let ready_to_import =
            !rows.is_empty() && invalid_rows.is_empty() && unknown_labels.is_empty();

        info!(
            total_rows = rows.len(),
            invalid = invalid_rows.len(),
            unknown_labels = unknown_labels.len(),
            ready = ready_to_import,
            "Import analysis complete"
        );

        ImportAnalysis {
            total_rows: rows.len(),
            unique_customer_count: customers.len(),
            job_count: jobs.len(),
            invalid_rows,
            unknown_catalog_labels: unknown_labels,
            preview_rows,
            ready_to_import,
        }
    }
}

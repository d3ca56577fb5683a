use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::error::{AppError, Result};
use crate::domain::import::CatalogEntry;

/// Capability interface for catalog access. The pipeline depends on this
/// trait only, so analysis stages stay pure and unit-testable without a
/// live store.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the catalog visible to a tenant: its own entries first, then
    /// the shared tenant-agnostic ones, each block in stored order. The
    /// returned order is significant — it is the contains-match tie-break.
    async fn fetch_catalog(&self, tenant_id: Uuid) -> Result<Vec<CatalogEntry>>;
}

#[derive(sqlx::FromRow)]
struct CatalogEntryRow {
    id: String,
    name: String,
}

impl From<CatalogEntryRow> for CatalogEntry {
    fn from(row: CatalogEntryRow) -> Self {
        CatalogEntry {
            id: row.id,
            name: row.name,
        }
    }
}

pub struct SqliteCatalogRepository {
    pool: SqlitePool,
}

impl SqliteCatalogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogProvider for SqliteCatalogRepository {
    async fn fetch_catalog(&self, tenant_id: Uuid) -> Result<Vec<CatalogEntry>> {
        let rows = sqlx::query_as::<_, CatalogEntryRow>(
            "SELECT id, name FROM skip_catalog
             WHERE tenant_id = ? OR tenant_id IS NULL
             ORDER BY tenant_id IS NULL, sort_no, id",
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::CatalogError(format!("Failed to fetch catalog: {}", e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

// ============================================================
// RECORD STORE
// ============================================================
// SQLite-backed store for the console's reference data. The import
// pipeline only reads the catalog, through the CatalogProvider trait.

pub mod catalog;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqliteSynchronous,
};

use crate::domain::error::{AppError, Result};

const SCHEMA: &str = include_str!("../../../resources/schema.sql");

/// Standard sizes every tenant starts with. Seeded once, only when the
/// catalog table is completely empty.
const SHARED_SEED: [(&str, &str); 5] = [
    ("shared-4yd", "4 Yard Skip"),
    ("shared-6yd", "6 Yard Skip"),
    ("shared-8yd", "8 Yard Skip"),
    ("shared-12yd", "12 Yard Skip"),
    ("shared-roro", "Roll-on Roll-off"),
];

/// Open (creating if missing) and prepare the record store.
pub async fn init_db(db_path: &Path) -> Result<SqlitePool> {
    let pool = connect_pool(db_path).await?;

    apply_schema(&pool).await?;
    seed_shared_catalog(&pool).await?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Database health check failed: {}", e)))?;

    Ok(pool)
}

fn db_path_to_url(db_path: &Path) -> Result<String> {
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| AppError::DatabaseError("Database path is not valid UTF-8".to_string()))?;
    Ok(format!("sqlite://{}", db_path_str.replace('\\', "/")))
}

async fn connect_pool(db_path: &Path) -> Result<SqlitePool> {
    let db_url = db_path_to_url(db_path)?;
    let options = SqliteConnectOptions::from_str(&db_url)
        .map_err(|e| AppError::DatabaseError(format!("Failed to parse database URL: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePool::connect_with(options)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to open database: {}", e)))
}

async fn apply_schema(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to apply schema: {}", e)))?;
    }
    Ok(())
}

async fn seed_shared_catalog(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skip_catalog")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to inspect catalog: {}", e)))?;

    if count > 0 {
        return Ok(());
    }

    for (sort_no, (id, name)) in SHARED_SEED.iter().enumerate() {
        sqlx::query(
            "INSERT INTO skip_catalog (id, tenant_id, name, sort_no) VALUES (?, NULL, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(sort_no as i64)
        .execute(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to seed catalog: {}", e)))?;
    }

    Ok(())
}

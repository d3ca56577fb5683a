use std::sync::{Arc, Mutex};

use tracing::info;

use skipdesk::application::ImportAnalysisUseCase;
use skipdesk::infrastructure::config::AppConfig;
use skipdesk::infrastructure::db::catalog::{CatalogProvider, SqliteCatalogRepository};
use skipdesk::infrastructure::db::init_db;
use skipdesk::interfaces::http::{add_log, start_server, LogEntry};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = AppConfig::load().expect("Failed to load configuration");

    let pool = init_db(&config.database_path)
        .await
        .expect("Failed to initialize database");

    let catalog: Arc<dyn CatalogProvider> = Arc::new(SqliteCatalogRepository::new(pool));
    let import_analysis = Arc::new(ImportAnalysisUseCase::new(
        catalog.clone(),
        config.analysis.clone(),
    ));

    let logs: Arc<Mutex<Vec<LogEntry>>> = Arc::new(Mutex::new(Vec::new()));
    add_log(
        &logs,
        "INFO",
        "System",
        &format!(
            "Backend initialized, HTTP server starting on {}:{}",
            config.host, config.port
        ),
    );
    info!(host = %config.host, port = config.port, "Starting skipdesk");

    let server = start_server(import_analysis, catalog, logs, &config.host, config.port)?;
    server.await
}

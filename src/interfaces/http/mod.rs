use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::ImportAnalysisUseCase;
use crate::domain::error::AppError;
use crate::infrastructure::db::catalog::CatalogProvider;

const MAX_LOG_ENTRIES: usize = 2000;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub import_analysis: Arc<ImportAnalysisUseCase>,
    pub catalog: Arc<dyn CatalogProvider>,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

#[derive(Deserialize, Validate)]
pub struct AnalyzeImportRequest {
    pub tenant_id: Uuid,

    /// The uploaded file as text; the frontend reads the file and posts it.
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

#[post("/imports/analyze")]
async fn analyze_import(
    data: web::Data<HttpState>,
    req: web::Json<AnalyzeImportRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().body(e.to_string());
    }

    let run_id = Uuid::new_v4();
    add_log(
        &data.logs,
        "INFO",
        "Import",
        &format!(
            "Analyzing import run {} for tenant {} ({} bytes)",
            run_id,
            req.tenant_id,
            req.content.len()
        ),
    );

    match data
        .import_analysis
        .analyze_text(req.tenant_id, &req.content)
        .await
    {
        Ok(analysis) => HttpResponse::Ok().json(analysis),
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "Import",
                &format!("Import run {} failed: {}", run_id, e),
            );
            error_response(e)
        }
    }
}

#[get("/catalog/{tenant_id}")]
async fn list_catalog(data: web::Data<HttpState>, path: web::Path<Uuid>) -> impl Responder {
    match data.catalog.fetch_catalog(*path).await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "Catalog",
                &format!("Failed to fetch catalog: {}", e),
            );
            error_response(e)
        }
    }
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data
        .logs
        .lock()
        .map(|guard| guard.clone())
        .unwrap_or_default();
    HttpResponse::Ok().json(logs)
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

fn error_response(e: AppError) -> HttpResponse {
    match &e {
        AppError::DecodeError(_) | AppError::ValidationError(_) => {
            HttpResponse::UnprocessableEntity().body(e.to_string())
        }
        AppError::NotFound(_) => HttpResponse::NotFound().body(e.to_string()),
        _ => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    let entry = LogEntry {
        time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };

    if let Ok(mut guard) = logs.lock() {
        guard.push(entry);
        if guard.len() > MAX_LOG_ENTRIES {
            let excess = guard.len() - MAX_LOG_ENTRIES;
            guard.drain(0..excess);
        }
    }
}

pub fn start_server(
    import_analysis: Arc<ImportAnalysisUseCase>,
    catalog: Arc<dyn CatalogProvider>,
    logs: Arc<Mutex<Vec<LogEntry>>>,
    host: &str,
    port: u16,
) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState {
        import_analysis,
        catalog,
        logs,
    });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local console

        App::new().wrap(cors).app_data(state.clone()).service(
            web::scope("/api")
                .service(analyze_import)
                .service(list_catalog)
                .service(get_logs)
                .service(health),
        )
    })
    .bind((host, port))?
    .run();

    Ok(server)
}

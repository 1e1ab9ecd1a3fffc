//! HTTP server for the report API

use crate::config::Config;
use crate::error::ReportError;
use crate::report::ReportService;
use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state
struct AppState {
    service: ReportService,
}

/// Request for report generation
#[derive(Debug, Deserialize)]
struct ReportRequest {
    query: String,
}

/// Response for report generation
#[derive(Debug, Serialize)]
struct ReportResponse {
    report: String,
    sources: Vec<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Run the HTTP server until shutdown
///
/// Credentials are checked at startup; a missing key fails here, before
/// the server ever binds.
pub async fn run_http_server(host: &str, port: u16, config: Config) -> Result<()> {
    let service = ReportService::from_config(&config)?;
    let state = Arc::new(AppState { service });

    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/report", post(handle_report))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let listener = bind(host, port).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Bind the listen socket; `host` may be an IP or a resolvable hostname
async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    Ok(TcpListener::bind((host, port)).await?)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn handle_report(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, (StatusCode, String)> {
    let generated = state
        .service
        .generate_report(&req.query)
        .await
        .map_err(|e| (status_for(&e), e.to_string()))?;

    Ok(Json(ReportResponse {
        report: generated.report,
        sources: generated.sources,
    }))
}

fn status_for(err: &ReportError) -> StatusCode {
    match err {
        ReportError::EmptyQuery => StatusCode::BAD_REQUEST,
        ReportError::MissingCredential(_) | ReportError::Template(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ReportError::InsufficientResults { .. }
        | ReportError::Search(_)
        | ReportError::Model(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&ReportError::EmptyQuery), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&ReportError::InsufficientResults {
                expected: 5,
                got: 2
            }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&ReportError::MissingCredential("GEMINI_API_KEY")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_bind_accepts_hostname() {
        let listener = bind("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[test]
    fn test_report_request_deserializes() {
        let req: ReportRequest =
            serde_json::from_str(r#"{"query": "How can RAG reduce hallucinations?"}"#).unwrap();
        assert_eq!(req.query, "How can RAG reduce hallucinations?");
    }
}

//! HTTP route handlers
//!
//! Handlers that sit outside the executor pipeline.

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::storage::{DatabaseBackendType, DatabaseStats};
use crate::{BuildInfo, build_info};
use actix_web::{HttpResponse, ResponseError, web};
use serde::Serialize;
use tracing::warn;

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
    pub build: BuildInfo,
    pub backend: DatabaseBackendType,
    pub tables: DatabaseStats,
}

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let storage = &state.storage;

    let tables = match storage.health_check().await {
        Ok(()) => storage.stats().await,
        Err(e) => Err(e),
    };

    match tables {
        Ok(tables) => ApiResponse::success(HealthReport {
            status: "healthy",
            timestamp: chrono::Utc::now().to_rfc3339(),
            build: build_info(),
            backend: storage.backend_type(),
            tables,
        })
        .to_http_response(),
        Err(e) => {
            warn!("Health check failed: {}", e);
            e.error_response()
        }
    }
}

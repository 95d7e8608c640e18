//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::AppState;

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "broker-api",
    }))
}

/// GET /health/ready
///
/// Reports `demo` when no backend is configured; the service is still
/// ready to serve the fallback dataset in that case.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.repository.as_ref() {
        None => (StatusCode::OK, Json(json!({ "status": "demo" }))),
        Some(repository) => match repository.ping().await {
            Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
            Err(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "error": e.to_string() })),
            ),
        },
    }
}

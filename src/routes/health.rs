use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up"))
)]
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "JobTracker API Server",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "jobs": "/api/jobs",
            "interviews": "/api/interviews",
            "analytics": "/api/analytics",
            "dashboard": "/api/dashboard",
            "docs": "/api-docs/openapi.json",
            "health": "/health",
        },
    }))
}

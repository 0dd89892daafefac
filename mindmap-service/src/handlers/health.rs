use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Fixed status string returned at the service root.
pub const STATUS_MESSAGE: &str = "Mindmap AI backend is up and running";

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": STATUS_MESSAGE }))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "mindmap-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

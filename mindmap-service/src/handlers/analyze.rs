use crate::services::AnalyzeError;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use service_core::error::AppError;

/// Accept one multipart image field and relay the provider's mindmap JSON.
///
/// By default every failure is reported as `{"error": ...}` in a 200
/// response so callers keep sniffing the body; `strict_errors` switches to
/// status-code signaling via `AppError` instead.
pub async fn analyze_note(State(state): State<AppState>, multipart: Multipart) -> Response {
    match run(&state, multipart).await {
        Ok(tree) => Json(tree).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Note analysis failed");
            if state.config.strict_errors {
                AppError::from(err).into_response()
            } else {
                Json(json!({ "error": err.to_string() })).into_response()
            }
        }
    }
}

async fn run(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<serde_json::Value, AnalyzeError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AnalyzeError::UploadRead(e.to_string()))?
        .ok_or(AnalyzeError::MissingFile)?;

    let data = field
        .bytes()
        .await
        .map_err(|e| AnalyzeError::UploadRead(e.to_string()))?;

    state.analyzer.analyze(&data).await
}

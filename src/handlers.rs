use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::response::ApiSuccessResponse;
use crate::AppState;

/// GET /api/todos
pub async fn list_todos(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let todos = state.service.get_all().await?;
    Ok(ApiSuccessResponse::new(
        StatusCode::OK,
        "Todos retrieved successfully",
        todos,
    ))
}

/// GET /health — liveness probe, bypasses the envelope.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthBody { status: "ok" }))
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standardized success envelope for API responses.
///
/// `status_code` always equals the HTTP status actually written; the
/// `IntoResponse` impl below takes the status from the envelope itself so
/// the two cannot drift apart.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSuccessResponse<T> {
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiSuccessResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccessResponse<T> {
    fn into_response(self) -> Response {
        // status_code was built from a StatusCode, so this cannot fail
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Standardized error envelope. Constructed only by the fault translation
/// path in `error`, never by business logic.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub detail: String,
    pub status_code: u16,
    pub title: Option<String>,
    // serializes as an ordered array of ["field", "message"] pairs
    pub errors: Option<Vec<(String, String)>>,
}

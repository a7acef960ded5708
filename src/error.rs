use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::response::ApiErrorResponse;

/// Application fault taxonomy.
///
/// Anticipated variants carry caller-facing detail and fix their status,
/// title, and structured errors at construction. Everything else funnels
/// into `Internal`, whose detail never reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{detail}")]
    NotFound { detail: String },

    #[error("{detail}")]
    Validation {
        detail: String,
        errors: Vec<(String, String)>,
    },

    #[error("{detail}")]
    Conflict { detail: String },

    #[error("{detail}")]
    BadRequest { detail: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        ApiError::NotFound {
            detail: detail.into(),
        }
    }

    pub fn validation(detail: impl Into<String>, errors: Vec<(String, String)>) -> Self {
        ApiError::Validation {
            detail: detail.into(),
            errors,
        }
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        ApiError::Conflict {
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        ApiError::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the error envelope from the variant's own fields.
    ///
    /// `Internal` always yields the fixed generic envelope regardless of
    /// the underlying fault.
    pub fn format_error(&self) -> ApiErrorResponse {
        let status_code = self.status_code().as_u16();
        match self {
            ApiError::NotFound { detail }
            | ApiError::Conflict { detail }
            | ApiError::BadRequest { detail } => ApiErrorResponse {
                detail: detail.clone(),
                status_code,
                title: None,
                errors: None,
            },
            ApiError::Validation { detail, errors } => ApiErrorResponse {
                detail: detail.clone(),
                status_code,
                title: Some("Validation Failed".to_string()),
                errors: Some(errors.clone()),
            },
            ApiError::Internal(_) => ApiErrorResponse {
                detail: "Internal Server Error".to_string(),
                status_code,
                title: None,
                errors: None,
            },
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.into())
    }
}

/// Boundary translator: every handler returns `Result<_, ApiError>`, so no
/// fault reaches the transport layer unformatted.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            // anticipated faults are expected traffic and are not logged
            tracing::error!(error = ?e, "Unexpected error: {e}");
        }
        let body = self.format_error();
        (self.status_code(), Json(body)).into_response()
    }
}

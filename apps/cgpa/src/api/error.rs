//! API error type and its HTTP mapping.

use super::types::ErrorResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cgpa_core::ValidationError;
use std::any::Any;
use thiserror::Error;
use tracing::error;

/// Errors returned by API handlers.
///
/// Every variant is rendered as `{"status": "error", "message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submission was rejected by the validator.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Anything the validator did not anticipate.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// No route matched.
    #[error("Endpoint not found")]
    NotFound,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Turn a handler panic into a 500 JSON response.
///
/// Used with `CatchPanicLayer` so one bad request never takes the
/// connection down without a reply.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(detail = %detail, "Handler panicked");
    ApiError::Internal(detail).into_response()
}

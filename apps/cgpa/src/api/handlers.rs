//! Route handlers.
//!
//! Handlers are thin: decode, hand off to `cgpa_core`, wrap the result.

use super::error::ApiError;
use super::types::{CalculateResponse, HealthResponse, SampleResponse};
use axum::Json;
use axum::body::Bytes;
use cgpa_core::{compute_overall_result, sample_input, validate_json};
use tracing::{debug, info, warn};

/// `POST /api/calculate`
///
/// The body is read as raw bytes so that missing, empty or malformed JSON
/// is reported through the same error envelope as validation failures.
pub async fn calculate_handler(body: Bytes) -> Result<Json<CalculateResponse>, ApiError> {
    debug!(bytes = body.len(), "Calculate request received");

    let record = validate_json(&body).inspect_err(|e| {
        warn!(
            semester = ?e.semester(),
            subject = ?e.subject(),
            "Rejected submission: {}",
            e
        );
    })?;

    let result = compute_overall_result(&record);
    if !result.is_finite() {
        return Err(ApiError::Internal(
            "calculation produced a non-finite value".to_string(),
        ));
    }

    info!(
        semesters = result.total_semesters,
        cgpa = result.cgpa,
        "CGPA calculated"
    );
    Ok(Json(CalculateResponse::new(result)))
}

/// `GET /api/health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// `GET /api/sample`
pub async fn sample_handler() -> Json<SampleResponse> {
    Json(SampleResponse::new(sample_input()))
}

/// Fallback for unknown paths.
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

//! Response bodies for the HTTP API.

use cgpa_core::OverallResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `status` value for successful responses.
pub const STATUS_SUCCESS: &str = "success";
/// `status` value for failed responses.
pub const STATUS_ERROR: &str = "error";
/// `status` value reported by the health check.
pub const STATUS_HEALTHY: &str = "healthy";
/// API version reported by the health check.
pub const API_VERSION: &str = "1.0.0";

/// Successful `POST /api/calculate` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub status: String,
    pub data: OverallResult,
    pub message: String,
}

impl CalculateResponse {
    #[must_use]
    pub fn new(data: OverallResult) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: data.summary_message(),
            data,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
        }
    }
}

/// `GET /api/health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: STATUS_HEALTHY.to_string(),
            message: "CGPA Calculator API is running".to_string(),
            version: API_VERSION.to_string(),
        }
    }
}

/// `GET /api/sample` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleResponse {
    pub status: String,
    pub sample_input: Value,
    pub description: String,
}

impl SampleResponse {
    #[must_use]
    pub fn new(sample_input: Value) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            sample_input,
            description: "Sample input format for CGPA calculation".to_string(),
        }
    }
}

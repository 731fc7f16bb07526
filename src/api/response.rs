//! Response types for the payroll engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AttendanceSummary, EarningsResult, SalaryStructure, StatutoryInfo};

/// Success response body for the `/calculate` endpoint.
///
/// Monetary fields in `earnings` are rounded to two decimal places at
/// this edge; everything upstream carries full precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The officer the calculation is for.
    pub officer_id: String,
    /// The categorized attendance summary for the window.
    pub summary: AttendanceSummary,
    /// The computed earnings, rounded for presentation.
    pub earnings: EarningsResult,
    /// The resolved monthly salary breakdown.
    pub salary_structure: SalaryStructure,
    /// The resolved statutory contribution flags.
    pub statutory_info: StatutoryInfo,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration file not found",
                    path,
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Failed to parse configuration file '{}'", path),
                    message,
                ),
            },
            EngineError::DataFetch { store, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "DATA_FETCH_ERROR",
                    format!("Data fetch from {} store failed", store),
                    message,
                ),
            },
            EngineError::InvalidDateRange { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(format!(
                    "Invalid date range: {} is after {}",
                    start, end
                )),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("CALCULATION_ERROR", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serializes_without_empty_details() {
        let error = ApiError::validation_error("as_of is required");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"VALIDATION_ERROR\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_serializes_with_details() {
        let error = ApiError::with_details("CONFIG_ERROR", "not found", "/etc/payroll.yaml");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"/etc/payroll.yaml\""));
    }

    #[test]
    fn test_invalid_date_range_maps_to_bad_request() {
        let error = EngineError::InvalidDateRange {
            start: chrono::NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
            end: chrono::NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        };
        let response = ApiErrorResponse::from(error);
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_data_fetch_maps_to_bad_gateway() {
        let error = EngineError::fetch("attendance", "timeout");
        let response = ApiErrorResponse::from(error);
        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert_eq!(response.error.code, "DATA_FETCH_ERROR");
    }

    #[test]
    fn test_config_errors_map_to_internal_error() {
        let error = EngineError::ConfigNotFound {
            path: "/missing.yaml".to_string(),
        };
        let response = ApiErrorResponse::from(error);
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }
}

//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    EvaluationWindow, build_attendance_summary, calculate_earnings, derive_salary_rates,
    resolve_salary_structure, resolve_statutory_info,
};
use crate::error::EngineError;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts already-fetched collaborator data for one officer and returns
/// the attendance summary, rounded earnings, and resolved salary
/// structure.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Reject inverted leave ranges up front
    for leave in &request.leave_applications {
        if leave.start_date > leave.end_date {
            warn!(
                correlation_id = %correlation_id,
                start = %leave.start_date,
                end = %leave.end_date,
                "Inverted leave range"
            );
            let response: ApiErrorResponse = EngineError::InvalidDateRange {
                start: leave.start_date,
                end: leave.end_date,
            }
            .into();
            return response.into_response();
        }
    }

    let config = state.config();
    let window = EvaluationWindow::month_to_date(request.as_of);

    let summary = build_attendance_summary(
        &request.attendance_records,
        &request.overtime_requests,
        &request.leave_applications,
        &request.calendar,
        &window,
    );

    let data_complete = request.compensation.is_some();
    let annual_salary = request
        .compensation
        .as_ref()
        .map(|r| r.annual_salary)
        .unwrap_or(Decimal::ZERO);

    let mut rates = derive_salary_rates(
        annual_salary,
        request.as_of,
        config.work_schedule.normal_working_hours,
    );
    if let Some(hourly) = request.compensation.as_ref().and_then(|r| r.hourly_rate) {
        rates.per_hour_rate = hourly;
    }
    let multiplier = request
        .compensation
        .as_ref()
        .and_then(|r| r.overtime_multiplier)
        .unwrap_or(config.work_schedule.overtime_multiplier);

    let earnings = calculate_earnings(&summary, &rates, multiplier, &window, data_complete);

    let structure = resolve_salary_structure(
        request
            .compensation
            .as_ref()
            .and_then(|r| r.salary_structure.as_ref()),
        annual_salary,
        &config.structure,
    );
    let statutory = resolve_statutory_info(
        request
            .compensation
            .as_ref()
            .and_then(|r| r.statutory_info.as_ref()),
        rates.monthly_base,
        &config.statutory,
    );

    info!(
        correlation_id = %correlation_id,
        officer_id = %request.officer_id,
        payable_days = %summary.payable_days,
        "Calculation complete"
    );

    let response = CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        officer_id: request.officer_id,
        summary,
        earnings: earnings.rounded(),
        salary_structure: structure,
        statutory_info: statutory,
    };

    (StatusCode::OK, Json(response)).into_response()
}

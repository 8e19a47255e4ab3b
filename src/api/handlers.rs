//! HTTP request handlers for the Salary Adjustment Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_adjustment;
use crate::models::RawEmployeeInput;
use crate::validation::parse_employee_input;

use super::request::AdjustmentRequest;
use super::response::{
    AdjustmentResponse, ApiError, ApiErrorResponse, EmployeeSummary, HealthResponse,
    UsageResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(query_handler))
        .route("/calculate", post(calculate_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET / endpoint.
///
/// Without any parameters this returns the usage document; otherwise the
/// query string is validated and the adjustment computed.
async fn query_handler(
    State(state): State<AppState>,
    query: Result<Query<RawEmployeeInput>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let raw = match query {
        Ok(Query(raw)) => raw,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query string rejected"
            );
            return json_response(StatusCode::BAD_REQUEST, ApiError::malformed_query(body_text));
        }
    };

    if raw.is_empty() {
        info!(correlation_id = %correlation_id, "Serving usage document");
        return json_response(StatusCode::OK, UsageResponse::new(state.config().server.port));
    }

    info!(correlation_id = %correlation_id, "Processing adjustment query");
    process_adjustment(correlation_id, &raw, state.current_year())
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a JSON body with the five employee fields and an optional
/// `current_year`.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdjustmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

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
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let current_year = request
        .current_year
        .unwrap_or_else(|| state.current_year());

    process_adjustment(correlation_id, &request.employee, current_year)
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse::default())
}

/// Validates the input, computes the adjustment and builds the response.
fn process_adjustment(correlation_id: Uuid, raw: &RawEmployeeInput, current_year: i32) -> Response {
    let start_time = Instant::now();

    let employee = match parse_employee_input(raw) {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                violations = ?err.violation_messages(),
                "Input rejected"
            );
            return error_response(err.into());
        }
    };

    match compute_adjustment(&employee, current_year) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.employee_id(),
                bracket = %result.bracket,
                tenure_adjustment = %result.tenure_adjustment,
                new_salary = %result.new_salary,
                duration_us = duration.as_micros(),
                "Adjustment completed successfully"
            );
            let response = AdjustmentResponse {
                calculation_id: correlation_id,
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                current_year,
                employee: EmployeeSummary::from(&employee),
                result,
            };
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Adjustment failed"
            );
            error_response(err.into())
        }
    }
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

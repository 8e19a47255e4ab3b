//! HTTP API module for the Salary Adjustment Engine.
//!
//! This module provides the REST API endpoints for validating employee
//! input and computing salary adjustments.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AdjustmentRequest;
pub use response::{
    AdjustmentResponse, ApiError, ApiErrorResponse, EmployeeSummary, HealthResponse,
    ParameterDoc, UsageResponse, ViolationDetail,
};
pub use state::AppState;

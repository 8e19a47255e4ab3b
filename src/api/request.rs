//! Request types for the Salary Adjustment Engine API.
//!
//! This module defines the JSON request body for the `/calculate` endpoint.
//! The `GET /` endpoint reads the same five fields from the query string
//! straight into a [`RawEmployeeInput`].

use serde::{Deserialize, Serialize};

use crate::models::RawEmployeeInput;

/// Request body for the `/calculate` endpoint.
///
/// The five employee fields sit at the top level of the body, exactly as
/// [`RawEmployeeInput`] accepts them, next to an optional `current_year`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentRequest {
    /// The employee fields as received.
    #[serde(flatten)]
    pub employee: RawEmployeeInput,
    /// Year to measure service against; the service's year when absent.
    #[serde(default, alias = "currentYear")]
    pub current_year: Option<i32>,
}

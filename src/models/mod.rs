//! Core data models for the Salary Adjustment Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod violation;

pub use calculation_result::{AuditStep, ComputationResult, TenureAdjustment};
pub use employee::{Gender, RawEmployeeInput, ValidatedEmployee};
pub(crate) use employee::text_or_number;
pub use violation::{ValidationOutcome, Violation};

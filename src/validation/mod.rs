//! Input validation for the Salary Adjustment Engine.
//!
//! This module turns a [`RawEmployeeInput`](crate::models::RawEmployeeInput)
//! into either a [`ValidatedEmployee`](crate::models::ValidatedEmployee) or
//! the complete, ordered list of violated rules.

mod input_validator;
mod numeric;

pub use input_validator::{
    MAXIMUM_BASE_SALARY, MINIMUM_AGE_EXCLUSIVE, MINIMUM_HIRE_YEAR_EXCLUSIVE, parse_employee_input,
    validate_employee_input,
};

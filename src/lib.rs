//! Salary Adjustment Engine
//!
//! This crate validates employee data and computes a readjusted salary from
//! the employee's age bracket, gender and years of service, exposing the
//! calculation through an HTTP API and a command line.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod validation;

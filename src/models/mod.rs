//! Core data models for employee reporting.
//!
//! This module contains all the domain models used throughout the crate.

mod analysis_result;
mod employee;
mod validation;

pub use analysis_result::{
    ManagerRelativeSalaryAssessment, ReportingLineDepthBreach, SalaryAssessment,
    SalaryMarginStatus,
};
pub use employee::{Employee, EmployeeDraft, EmployeeId};
pub use validation::{ValidationError, ValidationErrorType};

//! Error types for employee reporting.
//!
//! This module provides strongly-typed errors using the `thiserror` crate for
//! the fatal conditions that stop a reporting run. Defects found in the
//! registry itself are not errors in this sense: they are accumulated as
//! [`ValidationError`](crate::models::ValidationError) values instead.

use thiserror::Error;

/// The main error type for employee reporting.
///
/// # Example
///
/// ```
/// use employee_reporting::error::ReportingError;
///
/// let error = ReportingError::ConfigNotFound {
///     path: "/missing/reporting.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/reporting.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportingError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The registry path does not exist or is not a regular file.
    #[error("File not found or is not a regular file: {path}")]
    RegistryNotFound {
        /// The offending path.
        path: String,
    },

    /// Reading the registry failed part way through.
    #[error("Failed to read employee registry '{path}': {source}")]
    RegistryRead {
        /// The registry being read.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Relative salary margins were negative or inverted.
    #[error("{message}")]
    InvalidMargin {
        /// Which precondition was violated.
        message: String,
    },

    /// A manager's subordinate average or salary band exceeded the decimal range.
    #[error("Salary arithmetic overflowed while assessing manager [{manager_id}]")]
    SalaryOverflow {
        /// The manager whose team could not be assessed.
        manager_id: u32,
    },

    /// Results could not be serialized for output.
    #[error("Failed to serialize results: {message}")]
    Serialization {
        /// A description of the serialization failure.
        message: String,
    },

    /// A parsed employee was missing a required field when a complete record was needed.
    #[error("Employee at position {index} is missing required fields")]
    IncompleteEmployee {
        /// Zero-based position of the employee in the registry.
        index: usize,
    },
}

/// A type alias for Results that return ReportingError.
pub type ReportingResult<T> = Result<T, ReportingError>;

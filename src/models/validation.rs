//! Validation error models.
//!
//! Parsing and registry validation never stop on a bad record. Every defect
//! becomes a [`ValidationError`] so that a caller can report all of them at
//! once.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The category of a registry defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorType {
    /// A manager id does not resolve to any employee in the registry.
    UnknownManagerId,
    /// More than one employee has no manager.
    MultipleTopLevelManagers,
    /// The registry holds more employees than permitted.
    MaximumEmployeesExceeded,
    /// A single column failed type coercion or a required check.
    InvalidField,
    /// A row did not have the expected number of columns.
    IncompleteDataRow,
    /// Two or more employees share an id.
    DuplicateEmployeeId,
}

/// A single defect found while parsing or validating the registry.
///
/// # Example
///
/// ```
/// use employee_reporting::models::{ValidationError, ValidationErrorType};
///
/// let error = ValidationError::new(
///     ValidationErrorType::IncompleteDataRow,
///     "Incomplete employee data row on line 4",
/// );
/// assert_eq!(error.to_string(), "Incomplete employee data row on line 4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The category of the defect.
    #[serde(rename = "type")]
    pub error_type: ValidationErrorType,
    /// Human readable description, suitable for printing as-is.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error of the given type.
    pub fn new(error_type: ValidationErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ValidationErrorType::UnknownManagerId).unwrap(),
            "\"UNKNOWN_MANAGER_ID\""
        );
        assert_eq!(
            serde_json::to_string(&ValidationErrorType::MultipleTopLevelManagers).unwrap(),
            "\"MULTIPLE_TOP_LEVEL_MANAGERS\""
        );
        assert_eq!(
            serde_json::to_string(&ValidationErrorType::IncompleteDataRow).unwrap(),
            "\"INCOMPLETE_DATA_ROW\""
        );
    }

    #[test]
    fn test_validation_error_serializes_type_key() {
        let error = ValidationError::new(
            ValidationErrorType::DuplicateEmployeeId,
            "Duplicate Employee Id [7] found",
        );
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["type"], "DUPLICATE_EMPLOYEE_ID");
        assert_eq!(json["message"], "Duplicate Employee Id [7] found");
    }

    #[test]
    fn test_display_is_message() {
        let error = ValidationError::new(ValidationErrorType::InvalidField, "bad");
        assert_eq!(format!("{}", error), "bad");
    }
}

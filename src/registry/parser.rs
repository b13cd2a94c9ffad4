//! Registry row parser.
//!
//! Reads delimited employee rows into [`EmployeeDraft`] values. Rows with the
//! wrong number of columns are dropped with an `INCOMPLETE_DATA_ROW` error.
//! Rows with the right shape are always kept, even when some columns fail
//! coercion, so that later stages can see broken records and the reasons.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ReportingError, ReportingResult};
use crate::models::{EmployeeDraft, ValidationError, ValidationErrorType};

use super::field::{FieldValue, coerce_field};
use super::schema::{CsvSchema, DELIMITER, EMPLOYEE_SCHEMA, FieldBinding, FieldSchema};

/// Everything read from a registry source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEmployeesResult {
    /// Parsed rows in input order, including partially populated ones.
    pub employees: Vec<EmployeeDraft>,
    /// Row and field errors in the order they were found.
    pub errors: Vec<ValidationError>,
}

/// Parses the employee registry at `path`.
///
/// When `header_included` is set, the first line is skipped but still counts
/// toward the line numbers quoted in error messages.
///
/// # Errors
///
/// Returns [`ReportingError::RegistryRead`] if the file cannot be opened or
/// read. Bad data is never an `Err`; it is reported in the result's `errors`.
pub fn parse_registry<P: AsRef<Path>>(
    path: P,
    header_included: bool,
) -> ReportingResult<ParsedEmployeesResult> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    info!(path = %path_str, header_included, "Parsing employee registry");

    let file = File::open(path).map_err(|source| ReportingError::RegistryRead {
        path: path_str.clone(),
        source,
    })?;

    parse_registry_from_reader(BufReader::new(file), header_included).map_err(|err| match err {
        ReportingError::RegistryRead { source, .. } => ReportingError::RegistryRead {
            path: path_str,
            source,
        },
        other => other,
    })
}

/// Parses employee rows from any buffered reader.
///
/// # Examples
///
/// ```
/// use employee_reporting::registry::parse_registry_from_reader;
///
/// let csv = "id,firstName,lastName,salary,managerId\n\
///            123,Joe,Doe,60000,\n\
///            124,Martin,Chekov,45000,123\n";
/// let parsed = parse_registry_from_reader(csv.as_bytes(), true).unwrap();
///
/// assert_eq!(parsed.employees.len(), 2);
/// assert!(parsed.errors.is_empty());
/// assert_eq!(parsed.employees[1].manager_id, Some(123));
/// ```
pub fn parse_registry_from_reader<R: BufRead>(
    reader: R,
    header_included: bool,
) -> ReportingResult<ParsedEmployeesResult> {
    parse_with_schema(reader, header_included, &EMPLOYEE_SCHEMA)
}

fn parse_with_schema<R: BufRead>(
    reader: R,
    header_included: bool,
    schema: &CsvSchema,
) -> ReportingResult<ParsedEmployeesResult> {
    let mut result = ParsedEmployeesResult::default();
    let mut lines = reader.lines();
    let mut line_number = 0;

    if header_included {
        line_number += 1;
        if let Some(header) = lines.next() {
            header.map_err(read_error)?;
        }
    }

    for line in lines {
        let line = line.map_err(read_error)?;
        line_number += 1;

        let values: Vec<&str> = line.split(DELIMITER).collect();
        if values.len() != schema.field_count() {
            debug!(line_number, columns = values.len(), "Skipping incomplete row");
            result.errors.push(ValidationError::new(
                ValidationErrorType::IncompleteDataRow,
                format!("Incomplete employee data row on line {}", line_number),
            ));
            continue;
        }

        let mut draft = EmployeeDraft::default();
        for field in schema.fields() {
            let raw = values[field.position].trim();
            match coerce_field(raw, field, line_number) {
                Ok(value) => bind_field(&mut draft, field, value),
                Err(error) => {
                    debug!(line_number, field = field.name, "Invalid field value");
                    result.errors.push(error);
                }
            }
        }
        result.employees.push(draft);
    }

    info!(
        employees = result.employees.len(),
        errors = result.errors.len(),
        "Parsed employee registry"
    );
    Ok(result)
}

fn bind_field(draft: &mut EmployeeDraft, field: &FieldSchema, value: FieldValue) {
    match (field.binding, value) {
        (FieldBinding::Id, FieldValue::Integer(id)) => draft.id = id,
        (FieldBinding::FirstName, FieldValue::Text(name)) => draft.first_name = Some(name),
        (FieldBinding::LastName, FieldValue::Text(name)) => draft.last_name = Some(name),
        (FieldBinding::Salary, FieldValue::Decimal(salary)) => draft.salary = salary,
        (FieldBinding::ManagerId, FieldValue::Integer(manager_id)) => draft.manager_id = manager_id,
        (binding, value) => {
            warn!(field = field.name, ?binding, ?value, "Field type does not match binding");
        }
    }
}

fn read_error(source: std::io::Error) -> ReportingError {
    ReportingError::RegistryRead {
        path: "<reader>".to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn parse(csv: &str, header_included: bool) -> ParsedEmployeesResult {
        parse_registry_from_reader(csv.as_bytes(), header_included).unwrap()
    }

    fn messages(result: &ParsedEmployeesResult) -> Vec<&str> {
        result.errors.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_parses_complete_rows() {
        let result = parse(
            "123,Joe,Doe,60000,\n124,Martin,Chekov,45000,123\n125,Bob,Ronstad,47000,123\n",
            false,
        );

        assert!(result.errors.is_empty());
        assert_eq!(result.employees.len(), 3);

        let joe = &result.employees[0];
        assert_eq!(joe.id, Some(123));
        assert_eq!(joe.first_name.as_deref(), Some("Joe"));
        assert_eq!(joe.last_name.as_deref(), Some("Doe"));
        assert_eq!(joe.salary, Some(dec("60000")));
        assert_eq!(joe.manager_id, None);

        assert_eq!(result.employees[2].manager_id, Some(123));
    }

    #[test]
    fn test_header_is_skipped_but_counted() {
        let result = parse("Id,firstName,lastName,salary,managerId\n123,Joe,Doe,abc,\n", true);

        assert_eq!(result.employees.len(), 1);
        assert_eq!(
            messages(&result),
            vec!["Invalid value [abc] for field [salary] on line 2"]
        );
    }

    #[test]
    fn test_header_only_source_yields_nothing() {
        let result = parse("Id,firstName,lastName,salary,managerId\n", true);
        assert!(result.employees.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_empty_source_with_header_flag() {
        let result = parse("", true);
        assert!(result.employees.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_short_row_is_excluded_with_one_error() {
        let result = parse("123,Joe,Doe,60000,\n124,Martin,Chekov,45000\n", false);

        assert_eq!(result.employees.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors[0].error_type,
            ValidationErrorType::IncompleteDataRow
        );
        assert_eq!(
            result.errors[0].message,
            "Incomplete employee data row on line 2"
        );
    }

    #[test]
    fn test_long_row_is_excluded() {
        let result = parse("123,Joe,Doe,60000,,extra\n", false);
        assert!(result.employees.is_empty());
        assert_eq!(
            messages(&result),
            vec!["Incomplete employee data row on line 1"]
        );
    }

    #[test]
    fn test_blank_line_is_an_incomplete_row() {
        let result = parse("123,Joe,Doe,60000,\n\n124,Martin,Chekov,45000,123\n", false);
        assert_eq!(result.employees.len(), 2);
        assert_eq!(
            messages(&result),
            vec!["Incomplete employee data row on line 2"]
        );
    }

    #[test]
    fn test_row_with_field_errors_is_retained() {
        let result = parse("x,,Doe,-5,boss\n", false);

        assert_eq!(result.employees.len(), 1);
        assert_eq!(result.employees[0], EmployeeDraft {
            id: None,
            first_name: None,
            last_name: Some("Doe".to_string()),
            salary: None,
            manager_id: None,
        });
        assert_eq!(
            messages(&result),
            vec![
                "Invalid value [x] for field [id] on line 1",
                "Invalid value [] for field [firstName] on line 1",
                "Invalid value [-5] for field [salary] on line 1",
                "Invalid value [boss] for field [managerId] on line 1",
            ]
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let result = parse(" 123 ,  Joe , Doe ,  60000.50 , \n", false);

        assert!(result.errors.is_empty());
        let joe = result.employees[0].complete().unwrap();
        assert_eq!(joe.id, 123);
        assert_eq!(joe.full_name(), "Joe Doe");
        assert_eq!(joe.salary, dec("60000.50"));
        assert_eq!(joe.manager_id, None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let result = parse("Id,firstName,lastName,salary,managerId\r\n123,Joe,Doe,60000,\r\n", true);
        assert!(result.errors.is_empty());
        assert_eq!(result.employees[0].manager_id, None);
    }

    #[test]
    fn test_quotes_are_not_interpreted() {
        let result = parse("123,\"Doe, Joe\",x,60000,\n", false);
        assert!(result.employees.is_empty());
        assert_eq!(result.errors[0].error_type, ValidationErrorType::IncompleteDataRow);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = parse_registry("/nonexistent/employees.csv", true);
        match result {
            Err(ReportingError::RegistryRead { path, .. }) => {
                assert_eq!(path, "/nonexistent/employees.csv");
            }
            other => panic!("Expected RegistryRead error, got {:?}", other),
        }
    }
}

//! Employee registry ingestion and validation.
//!
//! This module turns delimited text into employee drafts and checks the
//! resulting collection for organisational integrity:
//!
//! - [`coerce_field`] and friends convert single column values
//! - [`EMPLOYEE_SCHEMA`] describes the column layout
//! - [`parse_registry`] reads a whole registry file
//! - [`validate_registry`] checks counts, ids and manager links
//!
//! # Example
//!
//! ```
//! use employee_reporting::registry::{parse_registry_from_reader, validate_registry};
//!
//! let csv = "1,Ada,Lovelace,90000,\n2,Charles,Babbage,80000,1\n";
//! let parsed = parse_registry_from_reader(csv.as_bytes(), false).unwrap();
//! let errors = validate_registry(&parsed.employees, 100);
//!
//! assert!(parsed.errors.is_empty());
//! assert!(errors.is_empty());
//! ```

mod field;
mod parser;
mod schema;
mod validator;

pub use field::{
    FieldResult, FieldValue, coerce_field, parse_decimal_abs_field, parse_int_abs_field,
    parse_string_field,
};
pub use parser::{ParsedEmployeesResult, parse_registry, parse_registry_from_reader};
pub use schema::{CsvSchema, DELIMITER, EMPLOYEE_SCHEMA, FieldBinding, FieldSchema, FieldType};
pub use validator::{
    validate_employee_ids, validate_manager_ids, validate_max_employees, validate_registry,
    validate_single_top_level_manager,
};

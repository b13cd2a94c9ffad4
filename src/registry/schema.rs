//! Column schema for the employee registry.
//!
//! The schema is a fixed, ordered list of [`FieldSchema`] descriptors. Each
//! descriptor names the column, its position, the coercion applied to it,
//! whether a value is mandatory, and which draft field receives the result.

/// Column delimiter. No quoting or escaping is recognised.
pub const DELIMITER: char = ',';

/// Coercion applied to a raw column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free text.
    String,
    /// Non-negative 32-bit integer.
    IntegerAbs,
    /// Non-negative arbitrary precision decimal.
    DecimalAbs,
}

/// The draft field a column is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBinding {
    /// `EmployeeDraft::id`
    Id,
    /// `EmployeeDraft::first_name`
    FirstName,
    /// `EmployeeDraft::last_name`
    LastName,
    /// `EmployeeDraft::salary`
    Salary,
    /// `EmployeeDraft::manager_id`
    ManagerId,
}

/// Describes a single registry column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Column name used in error messages.
    pub name: &'static str,
    /// Zero-based column index.
    pub position: usize,
    /// Coercion to apply.
    pub field_type: FieldType,
    /// Whether a blank value is an error.
    pub required: bool,
    /// Target draft field.
    pub binding: FieldBinding,
}

/// An ordered set of column descriptors.
#[derive(Debug, Clone, Copy)]
pub struct CsvSchema {
    fields: &'static [FieldSchema],
}

impl CsvSchema {
    /// Creates a schema from its ordered fields.
    pub const fn new(fields: &'static [FieldSchema]) -> Self {
        Self { fields }
    }

    /// The fields in column order.
    pub fn fields(&self) -> &'static [FieldSchema] {
        self.fields
    }

    /// Number of columns every data row must have.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Looks up a field by column name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The employee registry layout: `id,firstName,lastName,salary,managerId`.
pub const EMPLOYEE_SCHEMA: CsvSchema = CsvSchema::new(&[
    FieldSchema {
        name: "id",
        position: 0,
        field_type: FieldType::IntegerAbs,
        required: true,
        binding: FieldBinding::Id,
    },
    FieldSchema {
        name: "firstName",
        position: 1,
        field_type: FieldType::String,
        required: true,
        binding: FieldBinding::FirstName,
    },
    FieldSchema {
        name: "lastName",
        position: 2,
        field_type: FieldType::String,
        required: true,
        binding: FieldBinding::LastName,
    },
    FieldSchema {
        name: "salary",
        position: 3,
        field_type: FieldType::DecimalAbs,
        required: true,
        binding: FieldBinding::Salary,
    },
    FieldSchema {
        name: "managerId",
        position: 4,
        field_type: FieldType::IntegerAbs,
        required: false,
        binding: FieldBinding::ManagerId,
    },
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_schema_has_five_columns() {
        assert_eq!(EMPLOYEE_SCHEMA.field_count(), 5);
    }

    #[test]
    fn test_positions_match_column_order() {
        for (index, field) in EMPLOYEE_SCHEMA.fields().iter().enumerate() {
            assert_eq!(field.position, index, "field {}", field.name);
        }
    }

    #[test]
    fn test_only_manager_id_is_optional() {
        let optional: Vec<&str> = EMPLOYEE_SCHEMA
            .fields()
            .iter()
            .filter(|f| !f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(optional, vec!["managerId"]);
    }

    #[test]
    fn test_field_lookup_by_name() {
        let salary = EMPLOYEE_SCHEMA.field("salary").unwrap();
        assert_eq!(salary.field_type, FieldType::DecimalAbs);
        assert_eq!(salary.binding, FieldBinding::Salary);

        assert!(EMPLOYEE_SCHEMA.field("department").is_none());
    }
}

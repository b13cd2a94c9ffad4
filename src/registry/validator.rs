//! Whole-registry validation.
//!
//! Each rule inspects the full list of drafts independently. All rules always
//! run, and their errors are concatenated in a fixed order: maximum count,
//! duplicate ids, unknown manager ids, multiple top-level managers.

use std::collections::{BTreeMap, HashSet};

use tracing::info;

use crate::models::{EmployeeDraft, EmployeeId, ValidationError, ValidationErrorType};

/// Runs every registry rule and returns the combined errors.
///
/// An empty result means the registry is structurally sound. Running the
/// validation twice on the same input yields identical output.
///
/// # Examples
///
/// ```
/// use employee_reporting::models::{EmployeeDraft, ValidationErrorType};
/// use employee_reporting::registry::validate_registry;
///
/// let root = EmployeeDraft { id: Some(1), ..Default::default() };
/// let orphan = EmployeeDraft { id: Some(2), manager_id: Some(9), ..Default::default() };
///
/// let errors = validate_registry(&[root, orphan], 10);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].error_type, ValidationErrorType::UnknownManagerId);
/// ```
pub fn validate_registry(employees: &[EmployeeDraft], max_permitted: usize) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(validate_max_employees(employees, max_permitted));
    errors.extend(validate_employee_ids(employees));
    errors.extend(validate_manager_ids(employees));
    errors.extend(validate_single_top_level_manager(employees));
    errors
}

/// Flags a registry holding more than `max_permitted` employees.
pub fn validate_max_employees(
    employees: &[EmployeeDraft],
    max_permitted: usize,
) -> Vec<ValidationError> {
    info!(employees = employees.len(), max_permitted, "Validating maximum employee count");
    if employees.len() <= max_permitted {
        return Vec::new();
    }
    vec![ValidationError::new(
        ValidationErrorType::MaximumEmployeesExceeded,
        format!(
            "Number of employees [{}] exceeds the maximum permitted [{}]",
            employees.len(),
            max_permitted
        ),
    )]
}

/// Reports each id shared by more than one employee, once, in id order.
///
/// Employees without an id are grouped together, so two or more of them are
/// reported as a duplicate of the absent id.
pub fn validate_employee_ids(employees: &[EmployeeDraft]) -> Vec<ValidationError> {
    info!("Validating employee id uniqueness");
    let mut counts: BTreeMap<Option<EmployeeId>, usize> = BTreeMap::new();
    for employee in employees {
        *counts.entry(employee.id).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| {
            ValidationError::new(
                ValidationErrorType::DuplicateEmployeeId,
                format!("Duplicate Employee Id [{}] found", display_id(id)),
            )
        })
        .collect()
}

/// Reports, in input order, every manager id that matches no employee.
pub fn validate_manager_ids(employees: &[EmployeeDraft]) -> Vec<ValidationError> {
    info!("Validating manager id integrity");
    let known: HashSet<EmployeeId> = employees.iter().filter_map(|e| e.id).collect();

    employees
        .iter()
        .filter_map(|employee| {
            let manager_id = employee.manager_id?;
            if known.contains(&manager_id) {
                return None;
            }
            Some(ValidationError::new(
                ValidationErrorType::UnknownManagerId,
                format!(
                    "Manager Id [{}] for Employee Id [{}] could not be identified",
                    manager_id,
                    display_id(employee.id)
                ),
            ))
        })
        .collect()
}

/// Flags a registry with more than one employee lacking a manager.
///
/// A registry with no top-level manager at all is accepted.
pub fn validate_single_top_level_manager(employees: &[EmployeeDraft]) -> Vec<ValidationError> {
    info!("Validating single top-level manager");
    let top_level = employees.iter().filter(|e| e.manager_id.is_none()).count();
    if top_level <= 1 {
        return Vec::new();
    }
    vec![ValidationError::new(
        ValidationErrorType::MultipleTopLevelManagers,
        format!(
            "Only one top-level manager (null managerId) is allowed, but found [{}]",
            top_level
        ),
    )]
}

fn display_id(id: Option<EmployeeId>) -> String {
    id.map_or_else(|| "null".to_string(), |id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn draft(id: Option<EmployeeId>, manager_id: Option<EmployeeId>) -> EmployeeDraft {
        EmployeeDraft {
            id,
            first_name: Some("First".to_string()),
            last_name: Some("Last".to_string()),
            salary: None,
            manager_id,
        }
    }

    fn messages(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_valid_registry_has_no_errors() {
        let employees = vec![
            draft(Some(123), None),
            draft(Some(124), Some(123)),
            draft(Some(125), Some(123)),
        ];
        assert!(validate_registry(&employees, 10).is_empty());
    }

    #[test]
    fn test_empty_registry_has_no_errors() {
        assert!(validate_registry(&[], 0).is_empty());
    }

    #[test]
    fn test_max_employees_exceeded() {
        let employees = vec![draft(Some(1), None), draft(Some(2), Some(1))];
        let errors = validate_max_employees(&employees, 1);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_type, ValidationErrorType::MaximumEmployeesExceeded);
        assert_eq!(
            errors[0].message,
            "Number of employees [2] exceeds the maximum permitted [1]"
        );
    }

    #[test]
    fn test_max_employees_at_limit_is_accepted() {
        let employees = vec![draft(Some(1), None), draft(Some(2), Some(1))];
        assert!(validate_max_employees(&employees, 2).is_empty());
    }

    #[test]
    fn test_duplicate_ids_reported_once_in_id_order() {
        let employees = vec![
            draft(Some(9), None),
            draft(Some(5), Some(9)),
            draft(Some(9), Some(5)),
            draft(Some(5), Some(9)),
            draft(Some(5), Some(9)),
        ];
        let errors = validate_employee_ids(&employees);

        assert_eq!(
            messages(&errors),
            vec![
                "Duplicate Employee Id [5] found",
                "Duplicate Employee Id [9] found",
            ]
        );
        assert!(errors
            .iter()
            .all(|e| e.error_type == ValidationErrorType::DuplicateEmployeeId));
    }

    #[test]
    fn test_missing_ids_count_as_duplicates() {
        let employees = vec![draft(None, None), draft(Some(1), None), draft(None, Some(1))];
        assert_eq!(
            messages(&validate_employee_ids(&employees)),
            vec!["Duplicate Employee Id [null] found"]
        );
    }

    #[test]
    fn test_single_missing_id_is_not_a_duplicate() {
        let employees = vec![draft(None, None), draft(Some(1), None)];
        assert!(validate_employee_ids(&employees).is_empty());
    }

    #[test]
    fn test_unknown_manager_ids_in_input_order() {
        let employees = vec![
            draft(Some(1), None),
            draft(Some(3), Some(77)),
            draft(Some(2), Some(1)),
            draft(None, Some(55)),
        ];
        let errors = validate_manager_ids(&employees);

        assert_eq!(
            messages(&errors),
            vec![
                "Manager Id [77] for Employee Id [3] could not be identified",
                "Manager Id [55] for Employee Id [null] could not be identified",
            ]
        );
        assert!(errors
            .iter()
            .all(|e| e.error_type == ValidationErrorType::UnknownManagerId));
    }

    #[test]
    fn test_self_managed_employee_resolves() {
        let employees = vec![draft(Some(1), Some(1))];
        assert!(validate_manager_ids(&employees).is_empty());
    }

    #[test]
    fn test_multiple_top_level_managers() {
        let employees = vec![draft(Some(1), None), draft(Some(2), None)];
        let errors = validate_single_top_level_manager(&employees);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_type, ValidationErrorType::MultipleTopLevelManagers);
        assert_eq!(
            errors[0].message,
            "Only one top-level manager (null managerId) is allowed, but found [2]"
        );
    }

    #[test]
    fn test_no_top_level_manager_is_accepted() {
        let employees = vec![draft(Some(1), Some(2)), draft(Some(2), Some(1))];
        assert!(validate_single_top_level_manager(&employees).is_empty());
    }

    #[test]
    fn test_rules_concatenate_in_fixed_order() {
        let employees = vec![
            draft(Some(1), None),
            draft(Some(1), None),
            draft(Some(2), Some(99)),
        ];
        let kinds: Vec<ValidationErrorType> = validate_registry(&employees, 2)
            .into_iter()
            .map(|e| e.error_type)
            .collect();

        assert_eq!(
            kinds,
            vec![
                ValidationErrorType::MaximumEmployeesExceeded,
                ValidationErrorType::DuplicateEmployeeId,
                ValidationErrorType::UnknownManagerId,
                ValidationErrorType::MultipleTopLevelManagers,
            ]
        );
    }

    fn arb_registry() -> impl Strategy<Value = Vec<EmployeeDraft>> {
        prop::collection::vec(
            (prop::option::of(0u32..20), prop::option::of(0u32..20)),
            0..30,
        )
        .prop_map(|pairs| pairs.into_iter().map(|(id, m)| draft(id, m)).collect())
    }

    proptest! {
        #[test]
        fn prop_validation_is_idempotent(employees in arb_registry(), max in 0usize..40) {
            prop_assert_eq!(
                validate_registry(&employees, max),
                validate_registry(&employees, max)
            );
        }

        #[test]
        fn prop_one_duplicate_error_per_shared_id(id in 0u32..1000, copies in 2usize..12) {
            let employees: Vec<EmployeeDraft> =
                (0..copies).map(|_| draft(Some(id), None)).collect();
            let errors = validate_employee_ids(&employees);

            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(
                errors[0].message.clone(),
                format!("Duplicate Employee Id [{}] found", id)
            );
        }
    }
}

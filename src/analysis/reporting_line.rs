//! Reporting line depth analysis.
//!
//! The depth of an employee is the number of manager links that can be
//! followed upward from them before reaching an employee with no manager, or
//! a manager id that does not resolve. The registry is expected to have
//! passed validation first.

use std::collections::{HashMap, HashSet};

use tracing::{info, warn};

use crate::models::{Employee, EmployeeId, ReportingLineDepthBreach};

/// Finds employees whose reporting line is deeper than `max_depth`.
///
/// Breaches are returned in input order. Each carries the threshold and the
/// number of levels by which it was exceeded.
///
/// # Examples
///
/// ```
/// use employee_reporting::analysis::find_depth_breaches;
/// use employee_reporting::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = |id, manager_id| Employee {
///     id,
///     first_name: "First".to_string(),
///     last_name: "Last".to_string(),
///     salary: Decimal::new(1000, 0),
///     manager_id,
/// };
/// let employees = vec![employee(1, None), employee(2, Some(1)), employee(3, Some(2))];
///
/// let breaches = find_depth_breaches(&employees, 1);
/// assert_eq!(breaches.len(), 1);
/// assert_eq!(breaches[0].employee.id, 3);
/// assert_eq!(breaches[0].breached_amount, 1);
/// ```
pub fn find_depth_breaches(employees: &[Employee], max_depth: usize) -> Vec<ReportingLineDepthBreach> {
    info!(employees = employees.len(), max_depth, "Finding reporting line depth breaches");
    let by_id = index_by_id(employees);

    let breaches: Vec<ReportingLineDepthBreach> = employees
        .iter()
        .filter_map(|employee| {
            let depth = reporting_line_depth(employee, &by_id);
            (depth > max_depth).then(|| ReportingLineDepthBreach {
                employee: employee.clone(),
                depth_compared_to: max_depth,
                breached_amount: depth - max_depth,
            })
        })
        .collect();

    info!(breaches = breaches.len(), "Reporting line analysis complete");
    breaches
}

/// Counts the manager links above `employee`.
///
/// A manager id seen twice on the same walk ends the walk, so a cyclic
/// registry still terminates. The depth is the number of links followed
/// before the repeat. A manager id that resolves to no employee ends the walk
/// without being counted.
pub fn reporting_line_depth(employee: &Employee, by_id: &HashMap<EmployeeId, &Employee>) -> usize {
    let mut visited = HashSet::new();
    let mut depth = 0;
    let mut current = employee.manager_id;

    while let Some(manager_id) = current {
        let Some(manager) = by_id.get(&manager_id) else {
            break;
        };
        if !visited.insert(manager_id) {
            warn!(
                employee_id = employee.id,
                manager_id, "Cycle detected in reporting line"
            );
            break;
        }
        depth += 1;
        current = manager.manager_id;
    }
    depth
}

/// Builds an id lookup. When ids repeat, the first employee wins.
pub fn index_by_id(employees: &[Employee]) -> HashMap<EmployeeId, &Employee> {
    let mut by_id = HashMap::with_capacity(employees.len());
    for employee in employees {
        by_id.entry(employee.id).or_insert(employee);
    }
    by_id
}

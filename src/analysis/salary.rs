//! Manager salary assessment.
//!
//! Every manager with at least one direct subordinate is compared against the
//! average salary of those subordinates. Optional minimum and maximum margins
//! turn the average into an expected band:
//!
//! ```text
//! expected_min = round2(avg * (1 + min_margin))
//! expected_max = round2(avg * (1 + max_margin))
//! ```
//!
//! All rounding is half-up (away from zero) to 2 decimal places.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};

use crate::error::{ReportingError, ReportingResult};
use crate::models::{
    Employee, EmployeeId, ManagerRelativeSalaryAssessment, SalaryAssessment, SalaryMarginStatus,
};

use super::reporting_line::index_by_id;

/// Decimal places kept for salary averages and bands.
pub const SALARY_SCALE: u32 = 2;

/// Rounds a salary amount half-up to [`SALARY_SCALE`] places.
pub fn round_salary(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Assesses every manager's salary against their direct subordinates.
///
/// Results follow the order in which each manager id is first referenced by
/// a subordinate. Managers whose id resolves to no employee are skipped.
///
/// # Arguments
///
/// * `employees` - The validated registry
/// * `min_margin` - Minimum margin over the subordinate average (0.2 = 20%)
/// * `max_margin` - Maximum margin over the subordinate average
///
/// # Errors
///
/// Returns [`ReportingError::InvalidMargin`] before any analysis when either
/// margin is negative or the maximum is below the minimum, and
/// [`ReportingError::SalaryOverflow`] when a team's total or band exceeds the
/// decimal range.
///
/// # Examples
///
/// ```
/// use employee_reporting::analysis::assess_manager_salaries;
/// use employee_reporting::models::{Employee, SalaryMarginStatus};
/// use rust_decimal::Decimal;
///
/// let employee = |id, salary, manager_id| Employee {
///     id,
///     first_name: "First".to_string(),
///     last_name: "Last".to_string(),
///     salary: Decimal::new(salary, 2),
///     manager_id,
/// };
/// let employees = vec![
///     employee(1, 10999, None),
///     employee(2, 10000, Some(1)),
///     employee(3, 10000, Some(1)),
/// ];
///
/// let assessments = assess_manager_salaries(
///     &employees,
///     Some(Decimal::new(10, 2)),
///     Some(Decimal::new(15, 2)),
/// )?;
/// assert_eq!(assessments[0].assessment.status, SalaryMarginStatus::Underpaid);
/// assert_eq!(assessments[0].assessment.breach_amount, Decimal::new(1, 2));
/// # Ok::<(), employee_reporting::error::ReportingError>(())
/// ```
pub fn assess_manager_salaries(
    employees: &[Employee],
    min_margin: Option<Decimal>,
    max_margin: Option<Decimal>,
) -> ReportingResult<Vec<ManagerRelativeSalaryAssessment>> {
    info!(
        employees = employees.len(),
        min_margin = ?min_margin,
        max_margin = ?max_margin,
        "Assessing manager salaries"
    );
    validate_margins(min_margin, max_margin)?;

    let by_id = index_by_id(employees);
    let assessments: Vec<ManagerRelativeSalaryAssessment> = group_by_manager(employees)
        .into_iter()
        .filter_map(|(manager_id, subordinates)| {
            let manager = by_id.get(&manager_id)?;
            Some(assess_manager(manager, &subordinates, min_margin, max_margin))
        })
        .collect::<ReportingResult<_>>()?;

    info!(managers = assessments.len(), "Manager salary assessment complete");
    Ok(assessments)
}

fn validate_margins(min_margin: Option<Decimal>, max_margin: Option<Decimal>) -> ReportingResult<()> {
    let failure = if min_margin.is_some_and(|min| min < Decimal::ZERO) {
        Some("Minimum Relative Salary Percentage must be >= 0.0")
    } else if max_margin.is_some_and(|max| max < Decimal::ZERO) {
        Some("Maximum Relative Salary Percentage must be >= 0.0")
    } else if matches!((min_margin, max_margin), (Some(min), Some(max)) if max < min) {
        Some(
            "Maximum Relative Salary Percentage must be greater than or equal to Minimum Relative Salary Percentage",
        )
    } else {
        None
    };

    match failure {
        Some(message) => {
            warn!(reason = message, "Rejected salary margins");
            Err(ReportingError::InvalidMargin {
                message: message.to_string(),
            })
        }
        None => Ok(()),
    }
}

/// Groups employees by manager id, keeping first-reference order.
fn group_by_manager(employees: &[Employee]) -> Vec<(EmployeeId, Vec<&Employee>)> {
    let mut groups: Vec<(EmployeeId, Vec<&Employee>)> = Vec::new();
    let mut positions: HashMap<EmployeeId, usize> = HashMap::new();

    for employee in employees {
        let Some(manager_id) = employee.manager_id else {
            continue;
        };
        let position = *positions.entry(manager_id).or_insert_with(|| {
            groups.push((manager_id, Vec::new()));
            groups.len() - 1
        });
        groups[position].1.push(employee);
    }
    groups
}

fn assess_manager(
    manager: &Employee,
    subordinates: &[&Employee],
    min_margin: Option<Decimal>,
    max_margin: Option<Decimal>,
) -> ReportingResult<ManagerRelativeSalaryAssessment> {
    let overflow = || {
        warn!(manager_id = manager.id, "Salary arithmetic overflowed");
        ReportingError::SalaryOverflow {
            manager_id: manager.id,
        }
    };

    let total = subordinates
        .iter()
        .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.salary))
        .ok_or_else(overflow)?;
    let average = total
        .checked_div(Decimal::from(subordinates.len()))
        .map(round_salary)
        .ok_or_else(overflow)?;

    let band = |margin: Option<Decimal>| -> ReportingResult<Option<Decimal>> {
        margin
            .map(|m| {
                Decimal::ONE
                    .checked_add(m)
                    .and_then(|factor| average.checked_mul(factor))
                    .map(round_salary)
                    .ok_or_else(overflow)
            })
            .transpose()
    };
    let expected_min = band(min_margin)?;
    let expected_max = band(max_margin)?;

    Ok(ManagerRelativeSalaryAssessment {
        manager: manager.clone(),
        direct_subordinates_avg_salary: average,
        min_relative_salary_percentage: min_margin,
        max_relative_salary_percentage: max_margin,
        expected_min_salary: expected_min,
        expected_max_salary: expected_max,
        assessment: assess_salary(manager.salary, expected_min, expected_max),
    })
}

/// Places `actual` relative to an optional band.
///
/// Falling below the minimum takes precedence over exceeding the maximum.
pub fn assess_salary(
    actual: Decimal,
    expected_min: Option<Decimal>,
    expected_max: Option<Decimal>,
) -> SalaryAssessment {
    match (expected_min, expected_max) {
        (Some(min), _) if actual < min => SalaryAssessment {
            status: SalaryMarginStatus::Underpaid,
            breach_amount: min - actual,
        },
        (_, Some(max)) if actual > max => SalaryAssessment {
            status: SalaryMarginStatus::Overpaid,
            breach_amount: actual - max,
        },
        _ => SalaryAssessment::fairly_paid(),
    }
}

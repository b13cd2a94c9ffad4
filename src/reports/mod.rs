//! Fixed-width text reports.
//!
//! Column widths and the 70 character separator are part of the output
//! format and must not change. Each row is left aligned and padded, values
//! longer than their column are not truncated.

use rust_decimal::Decimal;
use tracing::info;

use crate::analysis::round_salary;
use crate::models::{
    EmployeeId, ManagerRelativeSalaryAssessment, ReportingLineDepthBreach, SalaryMarginStatus,
    ValidationError,
};

/// Line printed between the column header and the rows.
pub const SEPARATOR: &str =
    "----------------------------------------------------------------------";

/// Renders the reporting line depth breach table.
///
/// `None` renders a placeholder sentence. An empty list renders the heading,
/// column header and separator only.
///
/// # Examples
///
/// ```
/// use employee_reporting::reports::render_depth_breach_report;
///
/// assert_eq!(render_depth_breach_report(None), "No breach data found to report");
///
/// let report = render_depth_breach_report(Some(&[]));
/// assert_eq!(report.lines().count(), 3);
/// ```
pub fn render_depth_breach_report(breaches: Option<&[ReportingLineDepthBreach]>) -> String {
    info!("Rendering reporting line depth breach report");
    let Some(breaches) = breaches else {
        return "No breach data found to report".to_string();
    };

    let mut out = String::new();
    out.push_str("Following managers are breaching the prescribed reporting line depth:\n");
    out.push_str(&format!(
        "{:<20} {:<10} {:<10} {:<10} {:<10}\n",
        "Name", "ID", "ManagerID", "Depth", "Breached Amount"
    ));
    out.push_str(SEPARATOR);
    out.push('\n');

    for breach in breaches {
        let employee = &breach.employee;
        out.push_str(&format!(
            "{:<20} {:<10} {:<10} {:<10} {:<10}\n",
            employee.full_name(),
            employee.id,
            manager_label(employee.manager_id),
            breach.depth_compared_to,
            breach.breached_amount
        ));
    }
    out
}

/// Renders the managers whose assessment has the given `status`.
///
/// Salary and breach are shown rounded half-up to 2 places. `None` renders a
/// placeholder sentence.
pub fn render_salary_status_report(
    assessments: Option<&[ManagerRelativeSalaryAssessment]>,
    status: SalaryMarginStatus,
) -> String {
    info!(status = status.display_value(), "Rendering salary margin status report");
    let Some(assessments) = assessments else {
        return "No assessment data found to report".to_string();
    };

    let mut out = String::new();
    out.push_str(&format!(
        "Following managers have a current salary status of : {}\n",
        status.display_value()
    ));
    out.push_str(&format!(
        "{:<20} {:<10} {:<10} {:<15} {:<10}\n",
        "Name", "ID", "ManagerID", "Salary", "Breach"
    ));
    out.push_str(SEPARATOR);
    out.push('\n');

    for assessment in assessments.iter().filter(|a| a.assessment.status == status) {
        let manager = &assessment.manager;
        out.push_str(&format!(
            "{:<20} {:<10} {:<10} {:<15} {:<10}\n",
            manager.full_name(),
            manager.id,
            manager_label(manager.manager_id),
            money(manager.salary),
            money(assessment.assessment.breach_amount)
        ));
    }
    out
}

/// Lists parse and validation errors for a rejected registry.
pub fn render_validation_errors(errors: &[ValidationError]) -> String {
    let mut out =
        String::from("Following errors were detected in the parsing and validation of the file:\n\n");
    for error in errors {
        out.push_str(&error.message);
        out.push_str("\n\n");
    }
    out
}

fn manager_label(manager_id: Option<EmployeeId>) -> String {
    manager_id.map_or_else(|| "N/A".to_string(), |id| id.to_string())
}

/// Formats an amount with exactly two decimal places.
fn money(amount: Decimal) -> String {
    let mut rounded = round_salary(amount);
    rounded.rescale(2);
    rounded.to_string()
}

//! End-to-end reporting run.
//!
//! Parses the registry, validates it, and only when both steps produced no
//! errors runs the salary and reporting line analyses. A rejected registry
//! yields every error found rather than the first.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::{assess_manager_salaries, find_depth_breaches};
use crate::config::ReportingConfig;
use crate::error::{ReportingError, ReportingResult};
use crate::models::{
    Employee, EmployeeDraft, ManagerRelativeSalaryAssessment, ReportingLineDepthBreach,
    SalaryMarginStatus, ValidationError,
};
use crate::registry::{parse_registry, validate_registry};
use crate::reports::{
    render_depth_breach_report, render_salary_status_report, render_validation_errors,
};

/// The analyses run over an accepted registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryAnalysis {
    /// One entry per manager with direct subordinates.
    pub salary_assessments: Vec<ManagerRelativeSalaryAssessment>,
    /// Employees whose reporting line is too deep.
    pub depth_breaches: Vec<ReportingLineDepthBreach>,
}

impl RegistryAnalysis {
    /// Renders the underpaid, overpaid and depth breach reports, each
    /// followed by a blank line.
    pub fn render(&self) -> String {
        [
            render_salary_status_report(
                Some(&self.salary_assessments),
                SalaryMarginStatus::Underpaid,
            ),
            render_salary_status_report(
                Some(&self.salary_assessments),
                SalaryMarginStatus::Overpaid,
            ),
            render_depth_breach_report(Some(&self.depth_breaches)),
        ]
        .iter()
        .map(|report| format!("{}\n", report))
        .collect()
    }
}

/// The result of a reporting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// The registry was clean and has been analysed.
    Analysed(RegistryAnalysis),
    /// Parsing or validation found problems; no analysis was run.
    Rejected(Vec<ValidationError>),
}

impl ReportOutcome {
    /// Renders the outcome as console text.
    pub fn render(&self) -> String {
        match self {
            ReportOutcome::Analysed(analysis) => analysis.render(),
            ReportOutcome::Rejected(errors) => render_validation_errors(errors),
        }
    }
}

/// Runs the full pipeline over the registry file at `path`.
///
/// # Errors
///
/// Fails when the file cannot be read or the configured salary margins are
/// invalid. Registry defects are not errors; they produce
/// [`ReportOutcome::Rejected`].
pub fn generate_reports<P: AsRef<Path>>(
    path: P,
    config: &ReportingConfig,
) -> ReportingResult<ReportOutcome> {
    let parsed = parse_registry(path, config.csv_header_included())?;
    analyse_registry(parsed.employees, parsed.errors, config)
}

/// Validates parsed drafts and analyses them if no errors were found.
///
/// `parse_errors` are reported ahead of validation errors.
pub fn analyse_registry(
    drafts: Vec<EmployeeDraft>,
    parse_errors: Vec<ValidationError>,
    config: &ReportingConfig,
) -> ReportingResult<ReportOutcome> {
    let validation_errors = validate_registry(&drafts, config.max_permitted_employees());

    let mut errors = parse_errors;
    errors.extend(validation_errors);
    if !errors.is_empty() {
        warn!(
            errors = errors.len(),
            "Reports could not be generated due to errors in the registry"
        );
        return Ok(ReportOutcome::Rejected(errors));
    }

    let employees = complete_all(&drafts)?;
    let salary_assessments = assess_manager_salaries(
        &employees,
        config.min_relative_salary_percentage(),
        config.max_relative_salary_percentage(),
    )?;
    let depth_breaches = find_depth_breaches(&employees, config.max_reporting_line_depth());

    info!(
        employees = employees.len(),
        assessments = salary_assessments.len(),
        breaches = depth_breaches.len(),
        "Registry analysed"
    );
    Ok(ReportOutcome::Analysed(RegistryAnalysis {
        salary_assessments,
        depth_breaches,
    }))
}

fn complete_all(drafts: &[EmployeeDraft]) -> ReportingResult<Vec<Employee>> {
    drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .complete()
                .ok_or(ReportingError::IncompleteEmployee { index })
        })
        .collect()
}

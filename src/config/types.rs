//! Configuration types for employee reporting.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Salary margin settings for manager assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManagerReportConfig {
    /// Minimum margin over the subordinate average, as a fraction.
    #[serde(default)]
    pub min_relative_salary_percentage: Option<Decimal>,
    /// Maximum margin over the subordinate average, as a fraction.
    #[serde(default)]
    pub max_relative_salary_percentage: Option<Decimal>,
}

/// Limits applied to the employee population.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeReportConfig {
    /// Deepest reporting line allowed before an employee is flagged.
    pub max_reporting_line_depth: usize,
    /// Largest registry accepted.
    pub max_permitted_employees: usize,
}

/// The `reports` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportsConfig {
    /// Manager salary settings.
    #[serde(default)]
    pub manager: ManagerReportConfig,
    /// Employee population limits.
    pub employee: EmployeeReportConfig,
}

/// The `registry` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryConfig {
    /// Whether the first line of the registry is a header row.
    pub csv_header_included: bool,
}

/// The complete reporting configuration.
///
/// Built once at startup and passed by reference to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportingConfig {
    /// Report settings.
    pub reports: ReportsConfig,
    /// Registry input settings.
    pub registry: RegistryConfig,
}

impl ReportingConfig {
    /// Minimum manager salary margin, if configured.
    pub fn min_relative_salary_percentage(&self) -> Option<Decimal> {
        self.reports.manager.min_relative_salary_percentage
    }

    /// Maximum manager salary margin, if configured.
    pub fn max_relative_salary_percentage(&self) -> Option<Decimal> {
        self.reports.manager.max_relative_salary_percentage
    }

    /// Reporting line depth threshold.
    pub fn max_reporting_line_depth(&self) -> usize {
        self.reports.employee.max_reporting_line_depth
    }

    /// Registry size ceiling.
    pub fn max_permitted_employees(&self) -> usize {
        self.reports.employee.max_permitted_employees
    }

    /// Whether the registry starts with a header row.
    pub fn csv_header_included(&self) -> bool {
        self.registry.csv_header_included
    }
}

//! Result models produced by the hierarchy and compensation analyses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Employee;

/// An employee whose reporting line is deeper than permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingLineDepthBreach {
    /// The employee in breach.
    pub employee: Employee,
    /// The depth threshold the employee was compared against.
    pub depth_compared_to: usize,
    /// Actual depth minus the threshold. Always greater than zero.
    pub breached_amount: usize,
}

/// Outcome category of a manager salary assessment.
///
/// # Example
///
/// ```
/// use employee_reporting::models::SalaryMarginStatus;
///
/// assert_eq!(SalaryMarginStatus::FairlyPaid.display_value(), "Fair");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryMarginStatus {
    /// Salary is below the expected minimum.
    Underpaid,
    /// Salary is within the expected band.
    FairlyPaid,
    /// Salary is above the expected maximum.
    Overpaid,
}

impl SalaryMarginStatus {
    /// Label used in report headings.
    pub fn display_value(&self) -> &'static str {
        match self {
            SalaryMarginStatus::Underpaid => "Underpaid",
            SalaryMarginStatus::FairlyPaid => "Fair",
            SalaryMarginStatus::Overpaid => "Overpaid",
        }
    }
}

/// Status of a salary against its expected band and the distance outside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryAssessment {
    /// Where the salary sits relative to the band.
    pub status: SalaryMarginStatus,
    /// How far outside the band the salary is. Zero when fairly paid.
    pub breach_amount: Decimal,
}

impl SalaryAssessment {
    /// An assessment inside the band.
    pub fn fairly_paid() -> Self {
        Self {
            status: SalaryMarginStatus::FairlyPaid,
            breach_amount: Decimal::ZERO,
        }
    }
}

/// A manager's salary assessed against the average of their direct subordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerRelativeSalaryAssessment {
    /// The manager being assessed.
    pub manager: Employee,
    /// Mean salary of direct subordinates, rounded half-up to 2 places.
    pub direct_subordinates_avg_salary: Decimal,
    /// Minimum margin over the average, as a fraction (0.2 = 20%).
    pub min_relative_salary_percentage: Option<Decimal>,
    /// Maximum margin over the average, as a fraction.
    pub max_relative_salary_percentage: Option<Decimal>,
    /// Lower bound of the expected band, when a minimum margin applies.
    pub expected_min_salary: Option<Decimal>,
    /// Upper bound of the expected band, when a maximum margin applies.
    pub expected_max_salary: Option<Decimal>,
    /// The resulting status and breach.
    pub assessment: SalaryAssessment,
}

//! Employee model and related types.
//!
//! A registry row is first collected into an [`EmployeeDraft`], where every
//! field may be unset because its column failed validation. Drafts are kept
//! so that broken rows can still be validated and reported on. Analysis works
//! on complete [`Employee`] values promoted from drafts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of an employee within a registry.
pub type EmployeeId = u32;

/// An employee row as read from the registry, with any field possibly unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    /// Unique identifier, unset if the id column was invalid.
    pub id: Option<EmployeeId>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Annual salary.
    pub salary: Option<Decimal>,
    /// Identifier of the direct manager. Unset for the top of the hierarchy
    /// and for rows whose manager column was invalid.
    pub manager_id: Option<EmployeeId>,
}

impl EmployeeDraft {
    /// Promotes the draft to a complete employee.
    ///
    /// Returns `None` when any required field is unset. `manager_id` is
    /// optional and never blocks promotion.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_reporting::models::EmployeeDraft;
    /// use rust_decimal::Decimal;
    ///
    /// let draft = EmployeeDraft {
    ///     id: Some(123),
    ///     first_name: Some("Joe".to_string()),
    ///     last_name: Some("Doe".to_string()),
    ///     salary: Some(Decimal::new(60000, 0)),
    ///     manager_id: None,
    /// };
    /// let employee = draft.complete().unwrap();
    /// assert_eq!(employee.full_name(), "Joe Doe");
    ///
    /// assert!(EmployeeDraft::default().complete().is_none());
    /// ```
    pub fn complete(&self) -> Option<Employee> {
        Some(Employee {
            id: self.id?,
            first_name: self.first_name.clone()?,
            last_name: self.last_name.clone()?,
            salary: self.salary?,
            manager_id: self.manager_id,
        })
    }
}

impl From<Employee> for EmployeeDraft {
    fn from(employee: Employee) -> Self {
        Self {
            id: Some(employee.id),
            first_name: Some(employee.first_name),
            last_name: Some(employee.last_name),
            salary: Some(employee.salary),
            manager_id: employee.manager_id,
        }
    }
}

/// Represents a complete employee record in the organisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Annual salary.
    pub salary: Decimal,
    /// Identifier of the direct manager; `None` for the top-level manager.
    pub manager_id: Option<EmployeeId>,
}

impl Employee {
    /// Returns the first and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the employee reports to nobody.
    pub fn is_top_level(&self) -> bool {
        self.manager_id.is_none()
    }
}

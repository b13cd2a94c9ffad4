//! Read-only analyses over a validated employee registry.
//!
//! This module contains the reporting line depth analysis and the manager
//! salary assessment. Both take the full employee list and never modify it.

mod reporting_line;
mod salary;

pub use reporting_line::{find_depth_breaches, index_by_id, reporting_line_depth};
pub use salary::{SALARY_SCALE, assess_manager_salaries, assess_salary, round_salary};

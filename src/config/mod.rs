//! Configuration loading for employee reporting.
//!
//! This module loads the report thresholds and registry settings from a YAML
//! file into an explicit [`ReportingConfig`] value.
//!
//! # Example
//!
//! ```no_run
//! use employee_reporting::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/reporting.yaml").unwrap();
//! println!("Max employees: {}", config.config().max_permitted_employees());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{
    EmployeeReportConfig, ManagerReportConfig, RegistryConfig, ReportingConfig, ReportsConfig,
};

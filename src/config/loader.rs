//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the reporting
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ReportingError, ReportingResult};

use super::types::ReportingConfig;

/// Default configuration location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/reporting.yaml";

/// Loads the reporting configuration.
///
/// # File Format
///
/// ```text
/// reports:
///   manager:
///     min_relative_salary_percentage: "0.20"
///     max_relative_salary_percentage: "0.50"
///   employee:
///     max_reporting_line_depth: 4
///     max_permitted_employees: 1000
/// registry:
///   csv_header_included: true
/// ```
///
/// Both salary margins are optional.
///
/// # Example
///
/// ```no_run
/// use employee_reporting::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/reporting.yaml")?;
/// println!("Depth threshold: {}", loader.config().max_reporting_line_depth());
/// # Ok::<(), employee_reporting::error::ReportingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReportingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML or lacks a required key (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> ReportingResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        info!(path = %path_str, "Loading reporting configuration");

        let content = fs::read_to_string(path).map_err(|_| ReportingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|err| match err {
            ReportingError::ConfigParseError { message, .. } => ReportingError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> ReportingResult<Self> {
        let config =
            serde_yaml::from_str(content).map_err(|e| ReportingError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReportingConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ReportingConfig {
        self.config
    }
}

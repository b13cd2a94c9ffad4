//! Employee reporting CLI.
//!
//! Resolves the registry path and configuration, runs the reporting pipeline
//! and prints the result. Logs go to stderr so stdout carries only reports.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use employee_reporting::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use employee_reporting::error::{ReportingError, ReportingResult};
use employee_reporting::pipeline::{ReportOutcome, generate_reports};

/// Validate an employee registry and report on salaries and reporting lines
#[derive(Parser)]
#[command(name = "employee-reporting")]
#[command(version)]
struct Cli {
    /// Path to the employee registry CSV file
    registry: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print the analysis as JSON instead of text tables
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Exiting due to error");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ReportingResult<()> {
    if !cli.registry.is_file() {
        return Err(ReportingError::RegistryNotFound {
            path: cli.registry.display().to_string(),
        });
    }
    info!(registry = %cli.registry.display(), "Employee registry to be processed");

    let config = ConfigLoader::load(&cli.config)?.into_config();
    let outcome = generate_reports(&cli.registry, &config)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&outcome).map_err(|e| {
            ReportingError::Serialization {
                message: e.to_string(),
            }
        })?;
        println!("{}", json);
    } else {
        if let ReportOutcome::Rejected(errors) = &outcome {
            info!(errors = errors.len(), "Registry rejected");
        }
        print!("{}", outcome.render());
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

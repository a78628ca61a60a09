//! Open-data dashboard CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use opendata_dashboard::telemetry::init_tracing;
use opendata_dashboard::{DashboardConfig, DashboardError, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), DashboardError> {
    let config = load_config()?;
    config.validate()?;
    init_tracing();

    match config.operation_mode() {
        OperationMode::Serve => cli::serve::run(&config).await,
        OperationMode::Report => cli::report::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<DashboardConfig, DashboardError> {
    DashboardConfig::load().map_err(|error| DashboardError::Configuration {
        message: error.to_string(),
    })
}

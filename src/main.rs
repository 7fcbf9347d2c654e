//! Sentia CLI entrypoint for the product review analyzer.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use sentia::logging::{self, FallbackTarget};
use sentia::{AnalysisError, OperationMode, SentiaConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "Error: {error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AnalysisError> {
    let config = load_config()?;
    config.validate()?;

    let mode = config.operation_mode();
    let fallback = match mode {
        OperationMode::Interactive => FallbackTarget::Disabled,
        OperationMode::Analyze | OperationMode::ListReviews => FallbackTarget::Stderr,
    };
    if logging::init(&config, fallback)? {
        tracing::debug!(?mode, base = %config.api_base_url, "sentia starting");
    }

    match mode {
        OperationMode::Analyze => cli::analyze::run(&config).await,
        OperationMode::ListReviews => cli::review_listing::run(&config).await,
        OperationMode::Interactive => cli::review_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AnalysisError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<SentiaConfig, AnalysisError> {
    SentiaConfig::load().map_err(|error| AnalysisError::Configuration {
        message: error.to_string(),
    })
}

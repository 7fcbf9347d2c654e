//! Interactive mode for submitting and browsing reviews.
//!
//! This module provides the entry point for the terminal form. The gateway
//! and startup options are placed in module-level storage before the
//! bubbletea-rs program starts, because `Model::init()` takes no arguments.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use sentia::telemetry::{NoopTelemetrySink, TelemetrySink, TracingTelemetrySink};
use sentia::tui::{
    ReviewApp, set_gateway, set_initial_show_reviews, set_initial_terminal_size,
    set_telemetry_sink,
};
use sentia::{AnalysisError, SentiaConfig};

use super::build_gateway;

/// Runs the interactive review form.
///
/// # Errors
///
/// Returns an error if:
/// - The configured service origin is invalid
/// - The HTTP client cannot be built
/// - The terminal program fails to start or exits with an error
pub async fn run(config: &SentiaConfig) -> Result<(), AnalysisError> {
    let gateway = build_gateway(config)?;

    // Storage is write-once; a second run in the same process keeps the
    // first values.
    if !set_gateway(Arc::new(gateway)) {
        tracing::debug!("review gateway already configured");
    }
    if !set_initial_show_reviews(config.show_reviews) {
        tracing::debug!("initial review list visibility already configured");
    }
    if let Ok((width, height)) = crossterm::terminal::size()
        && !set_initial_terminal_size(width, height)
    {
        tracing::debug!("initial terminal size already configured");
    }
    if !set_telemetry_sink(interactive_telemetry_sink(config)) {
        tracing::debug!("telemetry sink already configured");
    }

    run_tui().await.map_err(|error| AnalysisError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Telemetry for the interactive form goes through `tracing`, since the
/// terminal is owned by the frame.
fn interactive_telemetry_sink(config: &SentiaConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(TracingTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ReviewApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}

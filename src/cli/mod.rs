//! CLI operation mode handlers.
//!
//! This module contains the implementations for the different operation
//! modes:
//! - [`analyze`]: Submit one review and print the analysis
//! - [`review_listing`]: Print every stored review
//! - [`review_tui`]: Interactive form for submitting and browsing reviews
//!
//! Output formatting utilities are in [`output`].

use std::sync::Arc;

use sentia::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use sentia::{AnalysisError, HttpReviewGateway, SentiaConfig};

pub mod analyze;
pub mod output;
pub mod review_listing;
pub mod review_tui;

/// Builds the HTTP gateway for the configured service origin.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidUrl`] for an unusable origin and
/// [`AnalysisError::Configuration`] when the HTTP client cannot be built.
pub fn build_gateway(config: &SentiaConfig) -> Result<HttpReviewGateway, AnalysisError> {
    HttpReviewGateway::new(config.endpoint()?, config.request_timeout())
}

/// Returns the telemetry sink for the non-interactive modes.
///
/// Events go to stderr as JSON lines when `--telemetry` is set.
pub fn cli_telemetry_sink(config: &SentiaConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}

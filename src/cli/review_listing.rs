//! Review history listing.

use std::io;
use std::time::Instant;

use sentia::telemetry::{TelemetryEvent, TelemetrySink};
use sentia::{AnalysisError, ReviewAnalysisGateway, ReviewRecord, SentiaConfig};

use super::output::{write_json, write_review_listing};
use super::{build_gateway, cli_telemetry_sink};

/// Prints every review the service has stored.
///
/// # Errors
///
/// Returns the gateway error when the listing request fails, or
/// [`AnalysisError::Io`] when stdout cannot be written.
pub async fn run(config: &SentiaConfig) -> Result<(), AnalysisError> {
    let gateway = build_gateway(config)?;
    let telemetry = cli_telemetry_sink(config);

    let reviews = list_with(&gateway, telemetry.as_ref()).await?;

    let mut stdout = io::stdout().lock();
    if config.json {
        write_json(&mut stdout, &sentia::ReviewListing { reviews })
    } else {
        write_review_listing(&mut stdout, &reviews)
    }
}

/// Fetches the listing through `gateway`, recording the outcome.
pub(crate) async fn list_with(
    gateway: &dyn ReviewAnalysisGateway,
    telemetry: &dyn TelemetrySink,
) -> Result<Vec<ReviewRecord>, AnalysisError> {
    let started = Instant::now();
    let reviews = gateway.list_reviews().await.inspect_err(|error| {
        tracing::warn!(%error, "review listing failed");
    })?;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::debug!(count = reviews.len(), latency_ms, "reviews listed");
    telemetry.record(TelemetryEvent::ReviewsFetched {
        latency_ms,
        review_count: reviews.len(),
    });
    Ok(reviews)
}

//! Single-shot review analysis.

use std::io;
use std::time::Instant;

use sentia::telemetry::{TelemetryEvent, TelemetrySink};
use sentia::{
    AnalysisError, AnalysisResult, ReviewAnalysisGateway, ReviewOperation, ReviewSubmission,
    SentiaConfig,
};

use super::output::{write_analysis, write_json};
use super::{build_gateway, cli_telemetry_sink};

/// Analyzes the review given by `--product-name` and `--review-text`.
///
/// # Errors
///
/// Returns [`AnalysisError::Validation`] when either value is blank, or the
/// gateway error when the service call fails.
pub async fn run(config: &SentiaConfig) -> Result<(), AnalysisError> {
    let submission = ReviewSubmission::new(
        config.product_name.as_deref().unwrap_or_default(),
        config.review_text.as_deref().unwrap_or_default(),
    )?;
    let gateway = build_gateway(config)?;
    let telemetry = cli_telemetry_sink(config);

    let result = analyze_with(&gateway, telemetry.as_ref(), &submission).await?;

    let mut stdout = io::stdout().lock();
    if config.json {
        write_json(&mut stdout, &result)
    } else {
        write_analysis(&mut stdout, &result)
    }
}

/// Sends `submission` through `gateway`, recording the outcome.
pub(crate) async fn analyze_with(
    gateway: &dyn ReviewAnalysisGateway,
    telemetry: &dyn TelemetrySink,
    submission: &ReviewSubmission,
) -> Result<AnalysisResult, AnalysisError> {
    let started = Instant::now();
    let outcome = gateway.analyze_review(submission).await;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match &outcome {
        Ok(result) => {
            tracing::info!(
                product = submission.product_name(),
                sentiment = %result.sentiment,
                latency_ms,
                "review analyzed"
            );
            telemetry.record(TelemetryEvent::AnalysisCompleted {
                latency_ms,
                sentiment: result.sentiment.clone(),
            });
        }
        Err(error) => {
            tracing::warn!(
                %error,
                summary = %error.user_message(ReviewOperation::Analyze),
                "review analysis failed"
            );
            telemetry.record(TelemetryEvent::AnalysisFailed { latency_ms });
        }
    }
    outcome
}

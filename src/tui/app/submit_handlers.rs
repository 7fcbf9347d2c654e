//! Analyze request handlers.
//!
//! A submission runs as a command so the update loop keeps processing input
//! while the request is in flight. Its outcome comes back as
//! `AppMsg::AnalysisComplete` or `AppMsg::AnalysisFailed`.

use std::any::Any;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::{ReviewApp, elapsed_ms};
use crate::analysis::{AnalysisError, AnalysisResult, ReviewOperation, ReviewSubmission};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Dispatches submission messages to their handlers.
    pub(super) fn handle_submission_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SubmitRequested => self.handle_submit_requested(),
            AppMsg::AnalysisComplete { result, latency_ms } => {
                self.handle_analysis_complete(result, *latency_ms)
            }
            AppMsg::AnalysisFailed {
                message,
                latency_ms,
            } => {
                self.handle_analysis_failed(message, *latency_ms);
                None
            }
            _ => {
                // Unreachable: caller filters to submission messages.
                None
            }
        }
    }

    /// Validates the form and starts the analyze request.
    ///
    /// Ignored while a submission is already in flight. A validation failure
    /// sets the error region and issues no request.
    fn handle_submit_requested(&mut self) -> Option<Cmd> {
        if self.loading {
            return None;
        }

        let submission = match self.form.submission() {
            Ok(submission) => submission,
            Err(error) => {
                self.error = Some(error.user_message(ReviewOperation::Analyze));
                return None;
            }
        };

        self.loading = true;
        self.error = None;
        self.result = None;
        tracing::debug!(product = submission.product_name(), "submitting review");

        Some(self.analyze_cmd(submission))
    }

    fn analyze_cmd(&self, submission: ReviewSubmission) -> Cmd {
        let gateway = self.services.gateway.clone();
        Box::pin(async move {
            let started = Instant::now();
            let outcome = match gateway {
                Some(gateway) => gateway.analyze_review(&submission).await,
                None => Err(AnalysisError::Configuration {
                    message: "no review analysis gateway configured".to_owned(),
                }),
            };
            let latency_ms = elapsed_ms(started);

            let msg = match outcome {
                Ok(result) => AppMsg::AnalysisComplete { result, latency_ms },
                Err(error) => {
                    tracing::warn!(%error, latency_ms, "review analysis failed");
                    AppMsg::AnalysisFailed {
                        message: error.user_message(ReviewOperation::Analyze),
                        latency_ms,
                    }
                }
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Shows the result, clears the inputs, and refreshes an open list.
    fn handle_analysis_complete(
        &mut self,
        result: &AnalysisResult,
        latency_ms: u64,
    ) -> Option<Cmd> {
        self.loading = false;
        self.result = Some(result.clone());
        self.form.clear();
        tracing::info!(
            sentiment = %result.sentiment,
            latency_ms,
            "review analyzed"
        );
        self.services.record(TelemetryEvent::AnalysisCompleted {
            latency_ms,
            sentiment: result.sentiment.clone(),
        });

        if self.review_list.is_visible() {
            return self.start_review_fetch();
        }
        None
    }

    /// Shows the error and keeps the inputs for another attempt.
    fn handle_analysis_failed(&mut self, message: &str, latency_ms: u64) {
        self.loading = false;
        self.error = Some(message.to_owned());
        self.services
            .record(TelemetryEvent::AnalysisFailed { latency_ms });
    }
}

//! Scripted gateway for exercising the client without a service.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::ReviewAnalysisGateway;
use crate::analysis::error::AnalysisError;
use crate::analysis::models::{AnalysisResult, ReviewRecord, ReviewSubmission};

/// Gateway that replays queued responses and records every call.
///
/// When a queue runs dry the gateway answers with a transport error so
/// unexpected calls surface as failures rather than hangs.
#[derive(Debug, Default)]
pub struct StubReviewGateway {
    analyses: Mutex<VecDeque<Result<AnalysisResult, AnalysisError>>>,
    listings: Mutex<VecDeque<Result<Vec<ReviewRecord>, AnalysisError>>>,
    submissions: Mutex<Vec<ReviewSubmission>>,
    listing_calls: Mutex<usize>,
}

impl StubReviewGateway {
    /// Queues the response for the next analyze call.
    pub fn push_analysis(&self, response: Result<AnalysisResult, AnalysisError>) {
        if let Ok(mut queue) = self.analyses.lock() {
            queue.push_back(response);
        }
    }

    /// Queues the response for the next listing call.
    pub fn push_listing(&self, response: Result<Vec<ReviewRecord>, AnalysisError>) {
        if let Ok(mut queue) = self.listings.lock() {
            queue.push_back(response);
        }
    }

    /// Returns every submission received so far.
    #[must_use]
    pub fn submissions(&self) -> Vec<ReviewSubmission> {
        self.submissions
            .lock()
            .map(|recorded| recorded.clone())
            .unwrap_or_default()
    }

    /// Returns how many analyze calls were made.
    #[must_use]
    pub fn analysis_calls(&self) -> usize {
        self.submissions().len()
    }

    /// Returns how many listing calls were made.
    #[must_use]
    pub fn listing_calls(&self) -> usize {
        self.listing_calls.lock().map(|count| *count).unwrap_or(0)
    }
}

#[async_trait]
impl ReviewAnalysisGateway for StubReviewGateway {
    async fn analyze_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<AnalysisResult, AnalysisError> {
        if let Ok(mut recorded) = self.submissions.lock() {
            recorded.push(submission.clone());
        }

        self.analyses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or_else(|| Err(exhausted("analysis")))
    }

    async fn list_reviews(&self) -> Result<Vec<ReviewRecord>, AnalysisError> {
        if let Ok(mut count) = self.listing_calls.lock() {
            *count += 1;
        }

        self.listings
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or_else(|| Err(exhausted("listing")))
    }
}

fn exhausted(kind: &str) -> AnalysisError {
    AnalysisError::Transport {
        message: format!("no scripted {kind} response"),
    }
}

//! Gateways for calling the review analysis service.
//!
//! The trait-based design lets the terminal interface and CLI run against a
//! mocked service in tests while [`HttpReviewGateway`] performs the real HTTP
//! requests.

mod error_mapping;
mod http;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use http::HttpReviewGateway;

use async_trait::async_trait;

use super::error::AnalysisError;
use super::models::{AnalysisResult, ReviewRecord, ReviewSubmission};

/// Gateway to the two remote review operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewAnalysisGateway: Send + Sync {
    /// Submits a review for analysis and returns the service's verdict.
    async fn analyze_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<AnalysisResult, AnalysisError>;

    /// Lists every review the service has stored.
    async fn list_reviews(&self) -> Result<Vec<ReviewRecord>, AnalysisError>;
}

//! reqwest implementation of [`ReviewAnalysisGateway`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::ReviewAnalysisGateway;
use super::error_mapping::{map_request_error, map_status_error};
use crate::analysis::endpoint::ServiceEndpoint;
use crate::analysis::error::AnalysisError;
use crate::analysis::models::{AnalysisResult, ReviewListing, ReviewRecord, ReviewSubmission};

/// Gateway that talks to the analysis service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    client: Client,
    endpoint: ServiceEndpoint,
}

impl HttpReviewGateway {
    /// Creates a gateway for the given endpoint.
    ///
    /// No timeout is applied unless `timeout` is provided.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: ServiceEndpoint, timeout: Option<Duration>) -> Result<Self, AnalysisError> {
        let mut builder = Client::builder();
        if let Some(limit) = timeout {
            builder = builder.timeout(limit);
        }
        let client = builder
            .build()
            .map_err(|error| AnalysisError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Returns the endpoint this gateway calls.
    #[must_use]
    pub const fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl ReviewAnalysisGateway for HttpReviewGateway {
    async fn analyze_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<AnalysisResult, AnalysisError> {
        let url = self.endpoint.analyze_url();
        tracing::debug!(%url, product = submission.product_name(), "submitting review");

        let response = self
            .client
            .post(url.clone())
            .json(submission)
            .send()
            .await
            .map_err(|error| map_request_error("analyze review", &error))?;

        ensure_success(response)
            .await?
            .json::<AnalysisResult>()
            .await
            .map_err(|error| map_request_error("decode analysis", &error))
    }

    async fn list_reviews(&self) -> Result<Vec<ReviewRecord>, AnalysisError> {
        let url = self.endpoint.reviews_url();
        tracing::debug!(%url, "listing reviews");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| map_request_error("list reviews", &error))?;

        let listing = ensure_success(response)
            .await?
            .json::<ReviewListing>()
            .await
            .map_err(|error| map_request_error("decode review listing", &error))?;
        Ok(listing.reviews)
    }
}

async fn ensure_success(response: Response) -> Result<Response, AnalysisError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(map_status_error(status.as_u16(), &body))
}

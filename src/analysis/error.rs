//! Error types surfaced by the analysis client.

use thiserror::Error;

/// Message shown when a submission is missing a required field.
pub const VALIDATION_MESSAGE: &str = "Please fill in both product name and review text";

const ANALYZE_FAILED_MESSAGE: &str = "Failed to analyze review";
const ANALYZE_ERRORED_MESSAGE: &str = "An error occurred while analyzing the review";
const FETCH_FAILED_MESSAGE: &str = "Failed to fetch reviews";

/// The remote operation an error arose from.
///
/// Users see different generic messages depending on which operation
/// failed, so error rendering needs to know the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOperation {
    /// `POST /api/analyze-review`.
    Analyze,
    /// `GET /api/reviews`.
    List,
}

/// Errors raised while validating input or talking to the analysis service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The product name or review text was empty after trimming.
    #[error("Please fill in both product name and review text")]
    Validation,

    /// The service answered with a non-success status.
    #[error("analysis service returned HTTP {status}{}", describe_service_message(.message.as_deref()))]
    Service {
        /// HTTP status code of the response.
        status: u16,
        /// The `error` field of the response body, when present.
        message: Option<String>,
    },

    /// The request could not be sent or the response could not be read.
    #[error("network error talking to the analysis service: {message}")]
    Transport {
        /// Transport-level error detail.
        message: String,
    },

    /// A success response carried a body that could not be decoded.
    #[error("analysis service response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// The configured service origin is not a usable URL.
    #[error("analysis service URL is invalid: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl AnalysisError {
    /// Returns the message shown in the UI error region for this error.
    ///
    /// Service-reported messages are passed through verbatim; every other
    /// failure collapses to the operation's generic message. Listing
    /// failures always use the generic fetch message.
    #[must_use]
    pub fn user_message(&self, operation: ReviewOperation) -> String {
        match (operation, self) {
            (_, Self::Validation) => VALIDATION_MESSAGE.to_owned(),
            (ReviewOperation::List, _) => FETCH_FAILED_MESSAGE.to_owned(),
            (ReviewOperation::Analyze, Self::Service { message, .. }) => message
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or(ANALYZE_FAILED_MESSAGE)
                .to_owned(),
            (ReviewOperation::Analyze, _) => ANALYZE_ERRORED_MESSAGE.to_owned(),
        }
    }
}

fn describe_service_message(message: Option<&str>) -> String {
    message.map_or_else(String::new, |text| format!(": {text}"))
}

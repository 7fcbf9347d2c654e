//! Client side of the review analysis service.
//!
//! The service owns sentiment inference and review history. This module
//! covers everything the client needs to talk to it: validated submissions,
//! response models, the endpoint layout, the error taxonomy shown to users,
//! and the gateway that performs the HTTP calls.

pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod models;
pub mod presentation;

pub use endpoint::{DEFAULT_API_BASE_URL, ServiceEndpoint};
pub use error::{AnalysisError, ReviewOperation, VALIDATION_MESSAGE};
pub use gateway::{HttpReviewGateway, ReviewAnalysisGateway};
pub use models::{AnalysisResult, ReviewId, ReviewListing, ReviewRecord, ReviewSubmission};
pub use presentation::{SentimentTrend, format_confidence, format_timestamp};

#[cfg(test)]
pub use gateway::MockReviewAnalysisGateway;

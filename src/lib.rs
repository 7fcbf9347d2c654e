//! Sentia library crate: a terminal client for a product review analysis
//! service.
//!
//! The library validates review submissions, talks to the analysis service
//! over HTTP, and provides an interactive terminal interface that renders
//! sentiment results and the history of analyzed reviews. The `sentia`
//! binary wires these pieces to configuration and the command line.

pub mod analysis;
pub mod config;
pub mod logging;
pub mod telemetry;
pub mod tui;

pub use analysis::{
    AnalysisError, AnalysisResult, HttpReviewGateway, ReviewAnalysisGateway, ReviewId,
    ReviewListing, ReviewOperation, ReviewRecord, ReviewSubmission, SentimentTrend,
    ServiceEndpoint,
};
pub use config::{OperationMode, SentiaConfig};

//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.sentia.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `SENTIA_API_BASE_URL`, `SENTIA_LOG_FILE`, …
//! 4. **Command-line arguments** – `--api-base-url`/`-a`, `--product-name`/`-p`, …
//!
//! # Configuration File
//!
//! ```toml
//! api_base_url = "http://localhost:5000"
//! show_reviews = true
//! log_file = "/tmp/sentia.log"
//! log_level = "debug"
//! ```

use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::analysis::endpoint::{DEFAULT_API_BASE_URL, ServiceEndpoint};
use crate::analysis::error::AnalysisError;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Submit one review from the command line and print the analysis.
    Analyze,
    /// Print every stored review.
    ListReviews,
    /// Interactive terminal form.
    Interactive,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use sentia::SentiaConfig;
///
/// let config = SentiaConfig::load().expect("failed to load configuration");
/// let endpoint = config.endpoint().expect("base URL should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SENTIA",
    discovery(
        dotfile_name = ".sentia.toml",
        config_file_name = "sentia.toml",
        app_name = "sentia"
    )
)]
pub struct SentiaConfig {
    /// Base origin of the review analysis service.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-a <URL>`
    /// - Environment: `SENTIA_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: String,

    /// Product name to analyze without starting the interactive form.
    ///
    /// Selects [`OperationMode::Analyze`] together with `review_text`.
    #[ortho_config(cli_short = 'p')]
    pub product_name: Option<String>,

    /// Review text to analyze without starting the interactive form.
    #[ortho_config(cli_short = 'r')]
    pub review_text: Option<String>,

    /// Prints every stored review and exits.
    #[ortho_config(cli_short = 'l')]
    pub list_reviews: bool,

    /// Opens the review list as soon as the interactive form starts.
    #[ortho_config(cli_short = 's')]
    pub show_reviews: bool,

    /// Emits JSON instead of text in the non-interactive modes.
    #[ortho_config(cli_short = 'j')]
    pub json: bool,

    /// Optional HTTP timeout, in seconds. No timeout applies when unset.
    #[ortho_config(cli_short = 'w')]
    pub request_timeout_seconds: Option<u64>,

    /// File that receives log output.
    ///
    /// The interactive form only logs when this is set, so log lines never
    /// draw over the terminal frame.
    #[ortho_config(cli_short = 'f')]
    pub log_file: Option<String>,

    /// Log filter used when `RUST_LOG` is not set (e.g. `info`, `debug`).
    #[ortho_config(cli_short = 'v')]
    pub log_level: String,

    /// Records telemetry events (stderr JSON lines in the CLI modes, the log
    /// in the interactive form).
    #[ortho_config(cli_short = 'e')]
    pub telemetry: bool,
}

impl Default for SentiaConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            product_name: None,
            review_text: None,
            list_reviews: false,
            show_reviews: false,
            json: false,
            request_timeout_seconds: None,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            telemetry: false,
        }
    }
}

impl SentiaConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// Any command-line review input selects `Analyze`; `list_reviews`
    /// selects `ListReviews`; otherwise the interactive form runs.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.product_name.is_some() || self.review_text.is_some() {
            OperationMode::Analyze
        } else if self.list_reviews {
            OperationMode::ListReviews
        } else {
            OperationMode::Interactive
        }
    }

    /// Checks that the configured options can be combined.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] when review input is combined
    /// with `list_reviews`, or when the timeout is zero.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let has_review_input = self.product_name.is_some() || self.review_text.is_some();
        if has_review_input && self.list_reviews {
            return Err(AnalysisError::Configuration {
                message: "--list-reviews cannot be combined with --product-name or --review-text"
                    .to_owned(),
            });
        }

        if self.request_timeout_seconds == Some(0) {
            return Err(AnalysisError::Configuration {
                message: "request timeout must be at least one second".to_owned(),
            });
        }

        Ok(())
    }

    /// Parses the configured base origin.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidUrl`] when the origin is unusable.
    pub fn endpoint(&self) -> Result<ServiceEndpoint, AnalysisError> {
        ServiceEndpoint::parse(&self.api_base_url)
    }

    /// Returns the HTTP timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    /// Returns the log file path, if one is configured.
    #[must_use]
    pub fn log_file_path(&self) -> Option<Utf8PathBuf> {
        self.log_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(Utf8PathBuf::from)
    }
}

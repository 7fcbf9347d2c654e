//! Resolution of the analysis service endpoints from a base origin.

use url::Url;

use super::error::AnalysisError;

/// Origin used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

const ANALYZE_PATH: &str = "api/analyze-review";
const REVIEWS_PATH: &str = "api/reviews";

/// Fully resolved URLs for the two service operations.
///
/// The base origin may carry a path prefix (for example when the service is
/// mounted behind a reverse proxy); endpoint paths are joined beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    base: Url,
    analyze: Url,
    reviews: Url,
}

impl ServiceEndpoint {
    /// Parses a base origin such as `http://localhost:5000`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidUrl`] when the value does not parse or
    /// does not use the `http` or `https` scheme.
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        let trimmed = raw.trim();
        let mut base = Url::parse(trimmed)
            .map_err(|error| AnalysisError::InvalidUrl(format!("{trimmed}: {error}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(AnalysisError::InvalidUrl(format!(
                "{trimmed}: scheme must be http or https"
            )));
        }

        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let directory = format!("{}/", base.path());
            base.set_path(&directory);
        }

        let analyze = join(&base, ANALYZE_PATH)?;
        let reviews = join(&base, REVIEWS_PATH)?;
        Ok(Self {
            base,
            analyze,
            reviews,
        })
    }

    /// Returns the normalised base origin.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Returns the URL of the analyze operation.
    #[must_use]
    pub const fn analyze_url(&self) -> &Url {
        &self.analyze
    }

    /// Returns the URL of the review listing operation.
    #[must_use]
    pub const fn reviews_url(&self) -> &Url {
        &self.reviews
    }
}

fn join(base: &Url, path: &str) -> Result<Url, AnalysisError> {
    base.join(path)
        .map_err(|error| AnalysisError::InvalidUrl(format!("{base}{path}: {error}")))
}

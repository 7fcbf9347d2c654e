//! Request and response models exchanged with the analysis service.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::AnalysisError;

/// A validated review ready to be sent for analysis.
///
/// Both fields are trimmed and guaranteed non-empty. The value serialises to
/// the request body the service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSubmission {
    product_name: String,
    review_text: String,
}

impl ReviewSubmission {
    /// Builds a submission from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Validation`] when either value is empty after
    /// trimming.
    pub fn new(product_name: &str, review_text: &str) -> Result<Self, AnalysisError> {
        let product_name = product_name.trim();
        let review_text = review_text.trim();
        if product_name.is_empty() || review_text.is_empty() {
            return Err(AnalysisError::Validation);
        }

        Ok(Self {
            product_name: product_name.to_owned(),
            review_text: review_text.to_owned(),
        })
    }

    /// Returns the trimmed product name.
    #[must_use]
    pub const fn product_name(&self) -> &str {
        self.product_name.as_str()
    }

    /// Returns the trimmed review text.
    #[must_use]
    pub const fn review_text(&self) -> &str {
        self.review_text.as_str()
    }
}

/// The analysis the service returned for a submission.
///
/// `sentiment` is kept exactly as the service sent it; use
/// [`super::SentimentTrend::classify`] to derive its display category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Product the review was written about.
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    /// Review text as stored by the service.
    #[serde(default, deserialize_with = "null_as_default")]
    pub review_text: String,
    /// Sentiment label, usually `positive`, `negative`, or `neutral`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment: String,
    /// Model confidence in `[0, 1]`, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Key points extracted from the review, in service order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key_points: Vec<String>,
    /// ISO-8601 time the analysis was produced, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Identifier of a stored review.
///
/// The service assigns identifiers; both numeric and textual forms are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewId {
    /// Numeric identifier (database primary key).
    Number(u64),
    /// Opaque textual identifier.
    Text(String),
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// A previously analyzed review, as listed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Service-assigned identifier.
    pub id: ReviewId,
    /// Product the review was written about. Older services omit it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    /// The stored review text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub review_text: String,
    /// Sentiment label recorded for the review.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment: String,
    /// Raw sentiment score recorded by the service, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
    /// Key points recorded for the review.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key_points: Vec<String>,
    /// ISO-8601 creation time, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Response body of the review listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewListing {
    /// All stored reviews; empty when the field is absent.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reviews: Vec<ReviewRecord>,
}

fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::empty_product("", "Great battery life")]
    #[case::empty_review("iPhone 15 Pro", "")]
    #[case::both_empty("", "")]
    #[case::whitespace_only("   ", "\n\t")]
    fn submission_rejects_missing_fields(#[case] product: &str, #[case] review: &str) {
        let result = ReviewSubmission::new(product, review);
        assert_eq!(result, Err(AnalysisError::Validation));
    }

    #[test]
    fn submission_trims_and_serialises_expected_body() {
        let submission = ReviewSubmission::new("  iPhone 15 Pro ", " Great battery life\n")
            .expect("valid input should build a submission");

        assert_eq!(submission.product_name(), "iPhone 15 Pro");
        assert_eq!(submission.review_text(), "Great battery life");
        assert_eq!(
            serde_json::to_value(&submission).expect("submission should serialise"),
            json!({"product_name": "iPhone 15 Pro", "review_text": "Great battery life"})
        );
    }

    #[test]
    fn analysis_result_decodes_full_response() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "product_name": "iPhone 15 Pro",
            "sentiment": "positive",
            "confidence": 0.92,
            "key_points": ["Battery"],
            "review_text": "Great battery life",
            "timestamp": "2024-05-01T10:30:00"
        }))
        .expect("response should decode");

        assert_eq!(result.product_name, "iPhone 15 Pro");
        assert_eq!(result.sentiment, "positive");
        assert_eq!(result.confidence, Some(0.92));
        assert_eq!(result.key_points, vec!["Battery".to_owned()]);
        assert_eq!(result.timestamp.as_deref(), Some("2024-05-01T10:30:00"));
    }

    #[test]
    fn analysis_result_tolerates_missing_and_null_optionals() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "product_name": "Kettle",
            "sentiment": "neutral",
            "review_text": "It boils water",
            "key_points": null
        }))
        .expect("response should decode");

        assert!(result.confidence.is_none());
        assert!(result.key_points.is_empty());
        assert!(result.timestamp.is_none());
    }

    #[rstest]
    #[case::null_sentiment(
        json!({"product_name": "Kettle", "review_text": "ok", "sentiment": null}),
        "Kettle",
        ""
    )]
    #[case::null_product(
        json!({"product_name": null, "review_text": "ok", "sentiment": "positive"}),
        "",
        "positive"
    )]
    fn analysis_result_reads_null_strings_as_empty(
        #[case] body: serde_json::Value,
        #[case] product_name: &str,
        #[case] sentiment: &str,
    ) {
        let result: AnalysisResult =
            serde_json::from_value(body).expect("null strings should decode");

        assert_eq!(result.product_name, product_name);
        assert_eq!(result.sentiment, sentiment);
        assert_eq!(result.review_text, "ok");
    }

    #[rstest]
    #[case::null_sentiment(json!({"id": 1, "product_name": "Fan", "review_text": "Fine", "sentiment": null}))]
    #[case::null_product(json!({"id": 1, "product_name": null, "review_text": "Fine", "sentiment": "neutral"}))]
    fn one_null_record_does_not_fail_the_listing(#[case] record: serde_json::Value) {
        let listing: ReviewListing = serde_json::from_value(json!({
            "reviews": [
                record,
                {"id": 2, "product_name": "Lamp", "review_text": "Bright", "sentiment": "positive"}
            ]
        }))
        .expect("listing should decode");

        let products: Vec<&str> = listing
            .reviews
            .iter()
            .map(|review| review.product_name.as_str())
            .collect();
        assert_eq!(products.len(), 2);
        assert_eq!(products.get(1), Some(&"Lamp"));
    }

    #[test]
    fn review_record_accepts_numeric_and_textual_ids() {
        let listing: ReviewListing = serde_json::from_value(json!({
            "reviews": [
                {
                    "id": 7,
                    "review_text": "Too loud",
                    "sentiment": "negative",
                    "sentiment_score": 0.81,
                    "key_points": ["Noise"],
                    "created_at": "2024-05-01T10:30:00.123456"
                },
                {"id": "abc-1", "product_name": "Fan", "review_text": "Fine", "sentiment": "neutral"}
            ]
        }))
        .expect("listing should decode");

        let ids: Vec<String> = listing
            .reviews
            .iter()
            .map(|record| record.id.to_string())
            .collect();
        assert_eq!(ids, vec!["7".to_owned(), "abc-1".to_owned()]);

        let first = listing.reviews.first().expect("first review should exist");
        assert_eq!(first.product_name, "");
        assert_eq!(first.sentiment_score, Some(0.81));

        let second = listing.reviews.get(1).expect("second review should exist");
        assert!(second.key_points.is_empty());
        assert!(second.created_at.is_none());
    }

    #[test]
    fn listing_without_reviews_field_is_empty() {
        let listing: ReviewListing =
            serde_json::from_value(json!({"status": "ok"})).expect("listing should decode");
        assert!(listing.reviews.is_empty());
    }
}

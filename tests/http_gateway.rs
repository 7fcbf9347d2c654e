//! Integration tests for the HTTP review gateway against a `wiremock` server.

use std::error::Error;
use std::time::Duration;

use rstest::{fixture, rstest};
use sentia::{
    AnalysisError, HttpReviewGateway, ReviewAnalysisGateway, ReviewId, ReviewOperation,
    ReviewSubmission, ServiceEndpoint,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type TestResult<T> = Result<T, Box<dyn Error>>;

#[fixture]
fn submission() -> ReviewSubmission {
    ReviewSubmission::new("  iPhone 15 Pro ", "Great battery life\n")
        .unwrap_or_else(|error| panic!("submission should be valid: {error}"))
}

fn gateway_for(base: &str) -> TestResult<HttpReviewGateway> {
    let endpoint = ServiceEndpoint::parse(base)?;
    Ok(HttpReviewGateway::new(endpoint, Some(Duration::from_secs(5)))?)
}

#[rstest]
#[tokio::test]
async fn analyze_posts_trimmed_json_and_decodes_result(
    submission: ReviewSubmission,
) -> TestResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-review"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "product_name": "iPhone 15 Pro",
            "review_text": "Great battery life"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product_name": "iPhone 15 Pro",
            "review_text": "Great battery life",
            "sentiment": "positive",
            "confidence": 0.92,
            "key_points": ["Battery"],
            "timestamp": "2024-05-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri())?;
    let result = gateway.analyze_review(&submission).await?;

    assert_eq!(result.sentiment, "positive");
    assert_eq!(result.confidence, Some(0.92));
    assert_eq!(result.key_points, vec!["Battery".to_owned()]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn service_error_field_is_surfaced(submission: ReviewSubmission) -> TestResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-review"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Review text too short"})),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri())?;
    let error = gateway
        .analyze_review(&submission)
        .await
        .err()
        .ok_or("expected the request to fail")?;

    assert_eq!(
        error,
        AnalysisError::Service {
            status: 400,
            message: Some("Review text too short".to_owned()),
        }
    );
    assert_eq!(
        error.user_message(ReviewOperation::Analyze),
        "Review text too short"
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn bodiless_server_error_uses_generic_message(
    submission: ReviewSubmission,
) -> TestResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-review"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri())?;
    let error = gateway
        .analyze_review(&submission)
        .await
        .err()
        .ok_or("expected the request to fail")?;

    assert_eq!(
        error.user_message(ReviewOperation::Analyze),
        "Failed to analyze review"
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn unreachable_service_is_a_transport_error(submission: ReviewSubmission) -> TestResult<()> {
    let server = MockServer::start().await;
    let base = server.uri();
    drop(server);

    let gateway = gateway_for(&base)?;
    let error = gateway
        .analyze_review(&submission)
        .await
        .err()
        .ok_or("expected the request to fail")?;

    assert!(
        matches!(error, AnalysisError::Transport { .. }),
        "unexpected error: {error:?}"
    );
    assert_eq!(
        error.user_message(ReviewOperation::Analyze),
        "An error occurred while analyzing the review"
    );
    Ok(())
}

#[tokio::test]
async fn listing_decodes_reviews_with_mixed_ids() -> TestResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reviews": [
                {
                    "id": 7,
                    "product_name": "Kettle",
                    "review_text": "Boils fast",
                    "sentiment": "positive",
                    "sentiment_score": 0.81,
                    "key_points": ["Speed"],
                    "created_at": "2024-05-01T10:00:00Z"
                },
                {
                    "id": "r-2",
                    "review_text": "Leaks",
                    "sentiment": "negative",
                    "key_points": null
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri())?;
    let reviews = gateway.list_reviews().await?;

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews.first().map(|review| &review.id), Some(&ReviewId::Number(7)));
    let second = reviews.get(1).ok_or("second review missing")?;
    assert_eq!(second.id, ReviewId::Text("r-2".to_owned()));
    assert!(second.product_name.is_empty());
    assert!(second.key_points.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn null_sentiment_in_success_body_still_decodes(
    submission: ReviewSubmission,
) -> TestResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product_name": "iPhone 15 Pro",
            "review_text": "Great battery life",
            "sentiment": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reviews": [
                {"id": 1, "product_name": null, "review_text": "Odd", "sentiment": null},
                {"id": 2, "product_name": "Lamp", "review_text": "Bright", "sentiment": "positive"}
            ]
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri())?;
    let result = gateway.analyze_review(&submission).await?;
    let reviews = gateway.list_reviews().await?;

    assert_eq!(result.sentiment, "");
    assert_eq!(result.product_name, "iPhone 15 Pro");
    assert_eq!(reviews.len(), 2);
    let first = reviews.first().ok_or("first review missing")?;
    assert!(first.product_name.is_empty());
    assert!(first.sentiment.is_empty());
    Ok(())
}

#[tokio::test]
async fn listing_without_reviews_field_is_empty() -> TestResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri())?;
    let reviews = gateway.list_reviews().await?;

    assert!(reviews.is_empty());
    Ok(())
}

#[tokio::test]
async fn listing_failure_uses_fetch_message() -> TestResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "db down"})))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri())?;
    let error = gateway
        .list_reviews()
        .await
        .err()
        .ok_or("expected the request to fail")?;

    assert_eq!(
        error.user_message(ReviewOperation::List),
        "Failed to fetch reviews"
    );
    Ok(())
}

#[tokio::test]
async fn base_path_prefix_is_preserved() -> TestResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analyzer/api/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reviews": []})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&format!("{}/analyzer", server.uri()))?;
    let reviews = gateway.list_reviews().await?;

    assert!(reviews.is_empty());
    Ok(())
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() -> TestResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri())?;
    let error = gateway
        .list_reviews()
        .await
        .err()
        .ok_or("expected the request to fail")?;

    assert!(
        matches!(error, AnalysisError::Decode { .. }),
        "unexpected error: {error:?}"
    );
    Ok(())
}

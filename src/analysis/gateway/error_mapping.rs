//! Mapping of HTTP failures onto [`AnalysisError`].

use crate::analysis::error::AnalysisError;

/// Maps a failure raised while sending a request or reading its body.
pub(super) fn map_request_error(operation: &str, error: &reqwest::Error) -> AnalysisError {
    if error.is_decode() {
        return AnalysisError::Decode {
            message: format!("{operation}: {error}"),
        };
    }

    AnalysisError::Transport {
        message: format!("{operation}: {error}"),
    }
}

/// Builds the error for a non-success response from its status and body.
pub(super) fn map_status_error(status: u16, body: &str) -> AnalysisError {
    AnalysisError::Service {
        status,
        message: extract_service_message(body),
    }
}

/// Reads the `error` field from a JSON error body.
fn extract_service_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::error_field(r#"{"error": "Review text is required"}"#, Some("Review text is required"))]
    #[case::blank_error(r#"{"error": ""}"#, None)]
    #[case::non_string_error(r#"{"error": {"code": 4}}"#, None)]
    #[case::other_fields(r#"{"message": "nope"}"#, None)]
    #[case::html_body("<html>Bad Gateway</html>", None)]
    #[case::empty_body("", None)]
    fn extracts_error_field_only(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_service_message(body).as_deref(), expected);
    }

    #[test]
    fn status_error_carries_status_and_message() {
        let error = map_status_error(400, r#"{"error": "Product name missing"}"#);
        assert_eq!(
            error,
            AnalysisError::Service {
                status: 400,
                message: Some("Product name missing".to_owned()),
            }
        );
    }
}

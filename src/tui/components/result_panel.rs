//! The "Analysis Results" card.

use crate::analysis::{AnalysisResult, format_confidence, format_timestamp};

use super::card::{card_title, push_indented, push_section};
use super::sentiment_badge::sentiment_badge;

/// Text shown when there is no result and the review list is hidden.
pub const EMPTY_RESULT_TEXT: &str = "Submit a review to see the analysis results here";

/// Renders the full analysis result, including every key point.
#[must_use]
pub fn render_result_panel(result: &AnalysisResult, max_width: usize) -> Vec<String> {
    let mut lines = vec![card_title("Analysis Results", max_width)];

    push_section(&mut lines, "Product", &result.product_name, max_width);

    lines.push("Sentiment".to_owned());
    lines.push(format!("  {}", sentiment_badge(&result.sentiment)));
    if let Some(confidence) = result.confidence {
        lines.push(format!("  Confidence: {}", format_confidence(confidence)));
    }

    if !result.key_points.is_empty() {
        lines.push("Key Points".to_owned());
        for (index, point) in result.key_points.iter().enumerate() {
            push_indented(&mut lines, &format!("{}. {point}", index + 1), max_width);
        }
    }

    push_section(&mut lines, "Original Review", &result.review_text, max_width);

    if let Some(timestamp) = &result.timestamp {
        lines.push(format!("Analyzed on {}", format_timestamp(timestamp)));
    }

    lines
}

/// Renders the placeholder card shown before the first result.
#[must_use]
pub fn render_empty_result(max_width: usize) -> Vec<String> {
    let mut lines = vec![card_title("Analysis Results", max_width)];
    push_indented(&mut lines, EMPTY_RESULT_TEXT, max_width);
    lines
}

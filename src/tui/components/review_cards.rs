//! The "All Reviews" card listing previously analyzed reviews.

use crate::analysis::{ReviewRecord, format_confidence, format_timestamp};

use super::card::{card_title, push_wrapped};
use super::sentiment_badge::sentiment_badge;

/// Key points shown per review card; the result panel shows all of them.
pub const MAX_CARD_KEY_POINTS: usize = 3;

/// Inputs for rendering the review list.
#[derive(Debug, Clone, Copy)]
pub struct ReviewListViewContext<'a> {
    /// Cached reviews in service order.
    pub reviews: &'a [ReviewRecord],
    /// Whether a fetch is outstanding.
    pub loading: bool,
    /// Whether the list has keyboard focus.
    pub focused: bool,
    /// Available width in columns.
    pub max_width: usize,
}

/// Renders the review list card.
#[must_use]
pub fn render_review_list(ctx: &ReviewListViewContext<'_>) -> Vec<String> {
    let marker = if ctx.focused { " *" } else { "" };
    let title = format!("All Reviews ({}){marker}", ctx.reviews.len());
    let mut lines = vec![card_title(&title, ctx.max_width)];

    if ctx.loading {
        lines.push("  Loading reviews...".to_owned());
        return lines;
    }

    if ctx.reviews.is_empty() {
        lines.push("  No reviews found".to_owned());
        return lines;
    }

    for (index, review) in ctx.reviews.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        push_review_card(&mut lines, review, ctx.max_width);
    }
    lines
}

fn push_review_card(lines: &mut Vec<String>, review: &ReviewRecord, max_width: usize) {
    lines.push(format!(
        "  {}  [{}]",
        review.product_name,
        sentiment_badge(&review.sentiment)
    ));
    push_wrapped(lines, &review.review_text, "    ", max_width);

    if !review.key_points.is_empty() {
        lines.push("    Key Points:".to_owned());
        for point in review.key_points.iter().take(MAX_CARD_KEY_POINTS) {
            push_wrapped(lines, &format!("- {point}"), "      ", max_width);
        }
    }

    if let Some(score) = review.sentiment_score {
        lines.push(format!("    Confidence: {}", format_confidence(score)));
    }
    if let Some(created_at) = &review.created_at {
        lines.push(format!("    {}", format_timestamp(created_at)));
    }
}

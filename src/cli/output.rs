//! Output formatting utilities for CLI operations.
//!
//! Text output mirrors the interactive cards without colour, so it stays
//! readable when piped. JSON output is the service model re-serialised.

use std::io::{self, Write};

use serde::Serialize;

use sentia::analysis::{
    AnalysisResult, ReviewRecord, SentimentTrend, format_confidence, format_timestamp,
};
use sentia::AnalysisError;

/// Key points printed per review in the listing.
const LISTING_KEY_POINTS: usize = 3;

/// Writes an analysis result as plain text.
pub fn write_analysis<W: Write>(writer: &mut W, result: &AnalysisResult) -> Result<(), AnalysisError> {
    writeln!(writer, "Product: {}", result.product_name).map_err(|e| io_error(&e))?;
    writeln!(writer, "Sentiment: {}", plain_badge(&result.sentiment)).map_err(|e| io_error(&e))?;
    if let Some(confidence) = result.confidence {
        writeln!(writer, "Confidence: {}", format_confidence(confidence))
            .map_err(|e| io_error(&e))?;
    }

    if !result.key_points.is_empty() {
        writeln!(writer, "Key Points:").map_err(|e| io_error(&e))?;
        for (index, point) in result.key_points.iter().enumerate() {
            writeln!(writer, "  {}. {point}", index + 1).map_err(|e| io_error(&e))?;
        }
    }

    writeln!(writer, "Original Review:").map_err(|e| io_error(&e))?;
    for line in result.review_text.lines() {
        writeln!(writer, "  {line}").map_err(|e| io_error(&e))?;
    }

    if let Some(timestamp) = &result.timestamp {
        writeln!(writer, "Analyzed on {}", format_timestamp(timestamp)).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the review listing as plain text.
pub fn write_review_listing<W: Write>(
    writer: &mut W,
    reviews: &[ReviewRecord],
) -> Result<(), AnalysisError> {
    writeln!(writer, "All Reviews ({})", reviews.len()).map_err(|e| io_error(&e))?;
    if reviews.is_empty() {
        writeln!(writer, "No reviews found").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for review in reviews {
        writeln!(writer).map_err(|e| io_error(&e))?;
        writeln!(
            writer,
            "#{} {} [{}]",
            review.id,
            review.product_name,
            plain_badge(&review.sentiment)
        )
        .map_err(|e| io_error(&e))?;
        for line in review.review_text.lines() {
            writeln!(writer, "  {line}").map_err(|e| io_error(&e))?;
        }
        for point in review.key_points.iter().take(LISTING_KEY_POINTS) {
            writeln!(writer, "  - {point}").map_err(|e| io_error(&e))?;
        }
        if let Some(score) = review.sentiment_score {
            writeln!(writer, "  Confidence: {}", format_confidence(score))
                .map_err(|e| io_error(&e))?;
        }
        if let Some(created_at) = &review.created_at {
            writeln!(writer, "  {}", format_timestamp(created_at)).map_err(|e| io_error(&e))?;
        }
    }
    Ok(())
}

/// Writes any serialisable value as pretty-printed JSON.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<(), AnalysisError> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(|error| AnalysisError::Io {
        message: format!("failed to write JSON output: {error}"),
    })?;
    writeln!(writer).map_err(|e| io_error(&e))
}

fn plain_badge(sentiment: &str) -> String {
    SentimentTrend::classify(sentiment)
        .glyph()
        .map_or_else(|| sentiment.to_owned(), |glyph| format!("{glyph} {sentiment}"))
}

/// Converts an I/O error to an [`AnalysisError::Io`].
pub(crate) fn io_error(error: &io::Error) -> AnalysisError {
    AnalysisError::Io {
        message: error.to_string(),
    }
}

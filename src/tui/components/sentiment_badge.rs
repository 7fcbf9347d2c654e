//! Coloured sentiment label.

use crate::analysis::SentimentTrend;

const ANSI_RESET: &str = "\x1b[0m";

/// Renders `sentiment` with its trend glyph and colour.
///
/// The label text is shown verbatim. Unrecognised sentiments get neither a
/// glyph nor a colour.
#[must_use]
pub fn sentiment_badge(sentiment: &str) -> String {
    let trend = SentimentTrend::classify(sentiment);

    match (trend.glyph(), trend.ansi_colour()) {
        (Some(glyph), Some(colour)) => format!("{colour}{glyph} {sentiment}{ANSI_RESET}"),
        _ => sentiment.to_owned(),
    }
}

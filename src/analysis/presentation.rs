//! Display rules shared by the terminal interface and the CLI output.

use chrono::{DateTime, NaiveDateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Visual category derived from a sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentTrend {
    /// `positive`: up-trend styling.
    Rising,
    /// `negative`: down-trend styling.
    Falling,
    /// `neutral`: flat styling.
    Flat,
    /// Anything else, including an empty label: default styling.
    Unrated,
}

impl SentimentTrend {
    /// Classifies a sentiment label, ignoring case.
    #[must_use]
    pub fn classify(sentiment: &str) -> Self {
        match sentiment.to_lowercase().as_str() {
            "positive" => Self::Rising,
            "negative" => Self::Falling,
            "neutral" => Self::Flat,
            _ => Self::Unrated,
        }
    }

    /// Returns the trend glyph, if the category has one.
    #[must_use]
    pub const fn glyph(self) -> Option<&'static str> {
        match self {
            Self::Rising => Some("▲"),
            Self::Falling => Some("▼"),
            Self::Flat => Some("■"),
            Self::Unrated => None,
        }
    }

    /// Returns the ANSI colour sequence used for the category.
    #[must_use]
    pub const fn ansi_colour(self) -> Option<&'static str> {
        match self {
            Self::Rising => Some("\x1b[32m"),
            Self::Falling => Some("\x1b[31m"),
            Self::Flat => Some("\x1b[33m"),
            Self::Unrated => None,
        }
    }
}

/// Formats a confidence in `[0, 1]` as a percentage with one decimal place.
///
/// ```
/// assert_eq!(sentia::analysis::format_confidence(0.92), "92.0%");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "confidence is scaled to a percentage for display"
)]
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Formats an ISO-8601 timestamp for display.
///
/// RFC 3339 values are converted to UTC. Values without an offset are
/// treated as UTC, which is what the service records. Anything else is
/// returned unchanged so the user still sees what the service sent.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.with_timezone(&Utc).format(TIMESTAMP_FORMAT).to_string();
    }

    trimmed.parse::<NaiveDateTime>().map_or_else(
        |_| trimmed.to_owned(),
        |naive| naive.and_utc().format(TIMESTAMP_FORMAT).to_string(),
    )
}

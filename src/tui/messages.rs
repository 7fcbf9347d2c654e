//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::analysis::{AnalysisResult, ReviewRecord};

/// Messages for the review analyzer TUI application.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    // Form editing
    /// Type a character into the focused field.
    InsertChar(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Insert a line break into the focused field.
    InsertNewline,
    /// Empty the focused field.
    ClearField,

    // Focus
    /// Move focus to the next element.
    FocusNext,
    /// Move focus to the previous element.
    FocusPrevious,
    /// Activate the focused element (button press or field advance).
    Activate,

    // Submission
    /// Submit the form for analysis.
    SubmitRequested,
    /// The analysis service returned a result.
    AnalysisComplete {
        /// The decoded result.
        result: AnalysisResult,
        /// Round-trip time of the request.
        latency_ms: u64,
    },
    /// The analysis request failed.
    AnalysisFailed {
        /// User-facing error text.
        message: String,
        /// Time until the failure was observed.
        latency_ms: u64,
    },

    // Review list
    /// Show or hide the review list.
    ToggleReviewList,
    /// Fetch the review list again.
    RefreshReviews,
    /// A listing request completed successfully.
    ReviewsLoaded {
        /// Sequence number of the request.
        request_id: u64,
        /// Reviews returned by the service.
        reviews: Vec<ReviewRecord>,
        /// Round-trip time of the request.
        latency_ms: u64,
    },
    /// A listing request failed.
    ReviewsFailed {
        /// Sequence number of the request.
        request_id: u64,
        /// User-facing error text.
        message: String,
    },

    // Scrolling
    /// Scroll the page up one line.
    ScrollUp,
    /// Scroll the page down one line.
    ScrollDown,
    /// Scroll the page up one screen.
    PageUp,
    /// Scroll the page down one screen.
    PageDown,

    // Application lifecycle
    /// Startup message emitted once by `init()`.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns `true` for messages that edit the form fields.
    #[must_use]
    pub const fn is_form_edit(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_) | Self::Backspace | Self::InsertNewline | Self::ClearField
        )
    }

    /// Returns `true` for messages that move focus.
    #[must_use]
    pub const fn is_focus(&self) -> bool {
        matches!(self, Self::FocusNext | Self::FocusPrevious | Self::Activate)
    }

    /// Returns `true` for messages about the analyze request.
    #[must_use]
    pub const fn is_submission(&self) -> bool {
        matches!(
            self,
            Self::SubmitRequested | Self::AnalysisComplete { .. } | Self::AnalysisFailed { .. }
        )
    }

    /// Returns `true` for messages about the review list.
    #[must_use]
    pub const fn is_review_list(&self) -> bool {
        matches!(
            self,
            Self::ToggleReviewList
                | Self::RefreshReviews
                | Self::ReviewsLoaded { .. }
                | Self::ReviewsFailed { .. }
        )
    }

    /// Returns `true` for scrolling messages.
    #[must_use]
    pub const fn is_scroll(&self) -> bool {
        matches!(
            self,
            Self::ScrollUp | Self::ScrollDown | Self::PageUp | Self::PageDown
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::AppMsg;

    #[rstest]
    #[case::edit(AppMsg::Backspace, true, false, false)]
    #[case::submit(AppMsg::SubmitRequested, false, true, false)]
    #[case::toggle(AppMsg::ToggleReviewList, false, false, true)]
    #[case::lifecycle(AppMsg::Quit, false, false, false)]
    fn categories_are_disjoint(
        #[case] msg: AppMsg,
        #[case] edit: bool,
        #[case] submission: bool,
        #[case] review_list: bool,
    ) {
        assert_eq!(msg.is_form_edit(), edit);
        assert_eq!(msg.is_submission(), submission);
        assert_eq!(msg.is_review_list(), review_list);
        assert!(!msg.is_scroll());
    }
}

//! Rendering logic for the review analyzer application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.
//!
//! The page is a fixed header, a scrollable body holding the cards, and a
//! one-row status bar.

use super::ReviewApp;
use crate::tui::components::{
    FormViewContext, ReviewListViewContext, render_empty_result, render_form,
    render_result_panel, render_review_list,
};
use crate::tui::input::InputContext;

const TITLE: &str = "Product Review Analyzer";
const SUBTITLE: &str = "AI-powered sentiment analysis and key insights extraction";
/// Header (title, subtitle, blank row) plus the status bar.
const CHROME_HEIGHT: usize = 4;

const HELP_TEXT: &str = r"
=== Keyboard Shortcuts ===

Form:
  Tab / Shift+Tab    Move between fields and buttons
  Enter              Next field, newline in review, or press button
  Alt+Enter          Analyze review (also Ctrl+Enter where supported)
  Ctrl+S             Analyze review from anywhere
  Backspace          Delete last character
  Ctrl+U             Clear the focused field

Reviews:
  Ctrl+L             View or hide all reviews
  j, Down            Scroll down (review list focused)
  k, Up              Scroll up (review list focused)
  r                  Refresh (review list focused)

Page:
  PgDn / PgUp        Scroll the page

Other:
  F1, ?              Toggle this help
  Ctrl+C, Ctrl+Q     Quit
  q                  Quit (outside the text fields)

Press any key to close this help.
";

impl ReviewApp {
    /// Renders the full page: header, visible body rows, and status bar.
    pub(super) fn render_page(&self) -> String {
        let body = self.body_lines();
        let visible = self.body_height();
        let offset = self.scroll_offset.min(self.max_scroll_offset());

        let mut output = String::new();
        output.push_str(&self.render_header());
        for line in body.iter().skip(offset).take(visible) {
            output.push_str(line);
            output.push('\n');
        }
        for _ in body.len().saturating_sub(offset).min(visible)..visible {
            output.push('\n');
        }
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let indicator = if self.loading || self.review_list.is_loading() {
            " [Loading...]"
        } else {
            ""
        };
        format!("{TITLE}{indicator}\n{SUBTITLE}\n\n")
    }

    /// Renders every body row before scrolling is applied.
    pub(super) fn body_lines(&self) -> Vec<String> {
        let max_width = self.content_width();
        let mut lines = render_form(&FormViewContext {
            form: &self.form,
            focus: self.focus,
            loading: self.loading,
            error: self.error.as_deref(),
            list_visible: self.review_list.is_visible(),
            max_width,
        });

        if let Some(result) = &self.result {
            lines.push(String::new());
            lines.extend(render_result_panel(result, max_width));
        } else if !self.review_list.is_visible() {
            lines.push(String::new());
            lines.extend(render_empty_result(max_width));
        }

        if self.review_list.is_visible() {
            lines.push(String::new());
            lines.extend(render_review_list(&ReviewListViewContext {
                reviews: self.review_list.reviews(),
                loading: self.review_list.is_loading(),
                focused: self.input_context() == InputContext::ReviewList,
                max_width,
            }));
        }

        lines
    }

    /// Renders the status bar with key hints for the focused element.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = match self.input_context() {
            InputContext::SingleLineField | InputContext::MultiLineField => {
                "Tab:next  Alt+Enter/Ctrl+S:analyze  Ctrl+L:reviews  F1:help  Ctrl+C:quit"
            }
            InputContext::Button => "Tab:next  Enter:press  Ctrl+L:reviews  ?:help  q:quit",
            InputContext::ReviewList => "j/k:scroll  r:refresh  Tab:next  ?:help  q:quit",
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        HELP_TEXT.to_owned()
    }

    /// Number of body rows that fit between header and status bar.
    pub(super) fn body_height(&self) -> usize {
        usize::from(self.height).saturating_sub(CHROME_HEIGHT).max(1)
    }

    /// Largest useful scroll offset for the current content.
    pub(super) fn max_scroll_offset(&self) -> usize {
        self.body_lines().len().saturating_sub(self.body_height())
    }

    /// Width available to the cards, leaving the autowrap guard column.
    fn content_width(&self) -> usize {
        usize::from(self.width).saturating_sub(1).max(1)
    }
}

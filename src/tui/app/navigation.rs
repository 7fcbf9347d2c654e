//! Focus movement, button activation, and page scrolling.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::Focus;

impl ReviewApp {
    /// Dispatches focus and scroll messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FocusNext => {
                self.focus = self.focus.next(self.review_list.is_visible());
                None
            }
            AppMsg::FocusPrevious => {
                self.focus = self.focus.previous(self.review_list.is_visible());
                None
            }
            AppMsg::Activate => self.handle_activate(),
            AppMsg::ScrollUp => {
                self.scroll_by(-1);
                None
            }
            AppMsg::ScrollDown => {
                self.scroll_by(1);
                None
            }
            AppMsg::PageUp => {
                self.scroll_by(-self.page_step());
                None
            }
            AppMsg::PageDown => {
                self.scroll_by(self.page_step());
                None
            }
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }

    /// Presses the focused button, or advances from the product name.
    fn handle_activate(&mut self) -> Option<Cmd> {
        match self.focus {
            Focus::ProductName => {
                self.focus = Focus::ReviewText;
                None
            }
            Focus::AnalyzeButton => self.handle_message(&AppMsg::SubmitRequested),
            Focus::ReviewsButton => self.handle_message(&AppMsg::ToggleReviewList),
            Focus::ReviewText | Focus::ReviewList => None,
        }
    }

    fn page_step(&self) -> isize {
        isize::try_from(self.body_height().max(1)).unwrap_or(isize::MAX)
    }

    /// Moves the page by `delta` rows, clamped to the rendered content.
    pub(super) fn scroll_by(&mut self, delta: isize) {
        let moved = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = moved.min(self.max_scroll_offset());
    }
}

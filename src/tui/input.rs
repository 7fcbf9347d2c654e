//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on which element
//! holds focus: text inputs swallow printable characters, while the buttons
//! and the review list treat them as shortcuts.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::Focus;

/// Focus-dependent context used when mapping key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// A single-line text input has focus.
    SingleLineField,
    /// A multi-line text input has focus.
    MultiLineField,
    /// One of the form buttons has focus.
    Button,
    /// The review list has focus.
    ReviewList,
}

impl InputContext {
    /// Derives the context from the focused element.
    #[must_use]
    pub const fn from_focus(focus: Focus) -> Self {
        match focus {
            Focus::ProductName => Self::SingleLineField,
            Focus::ReviewText => Self::MultiLineField,
            Focus::AnalyzeButton | Focus::ReviewsButton => Self::Button,
            Focus::ReviewList => Self::ReviewList,
        }
    }

    /// Returns `true` when a text input has focus.
    #[must_use]
    pub const fn is_field(self) -> bool {
        matches!(self, Self::SingleLineField | Self::MultiLineField)
    }
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &KeyMsg, context: InputContext) -> Option<AppMsg> {
    if let Some(global) = map_global_key(key) {
        return Some(global);
    }

    if context.is_field() {
        map_field_key(key, context)
    } else {
        map_shortcut_key(key, context)
    }
}

/// Keys that behave identically regardless of focus.
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_global_key(key: &KeyMsg) -> Option<AppMsg> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.key {
        KeyCode::Char('c' | 'q') if control => Some(AppMsg::Quit),
        KeyCode::Char('s') if control => Some(AppMsg::SubmitRequested),
        KeyCode::Char('l') if control => Some(AppMsg::ToggleReviewList),
        KeyCode::F(1) => Some(AppMsg::ToggleHelp),
        KeyCode::BackTab => Some(AppMsg::FocusPrevious),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(AppMsg::FocusPrevious)
        }
        KeyCode::Tab => Some(AppMsg::FocusNext),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        _ => None,
    }
}

fn map_field_key(key: &KeyMsg, context: InputContext) -> Option<AppMsg> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.key {
        KeyCode::Enter if control || alt => Some(AppMsg::SubmitRequested),
        KeyCode::Enter if context == InputContext::MultiLineField => Some(AppMsg::InsertNewline),
        KeyCode::Enter => Some(AppMsg::Activate),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Char('u') if control => Some(AppMsg::ClearField),
        KeyCode::Char(character) if !control && !alt => Some(AppMsg::InsertChar(character)),
        _ => None,
    }
}

fn map_shortcut_key(key: &KeyMsg, context: InputContext) -> Option<AppMsg> {
    let in_list = context == InputContext::ReviewList;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Enter if context == InputContext::Button => Some(AppMsg::Activate),
        KeyCode::Char('k') | KeyCode::Up if in_list => Some(AppMsg::ScrollUp),
        KeyCode::Char('j') | KeyCode::Down if in_list => Some(AppMsg::ScrollDown),
        KeyCode::Char('r') if in_list => Some(AppMsg::RefreshReviews),
        _ => None,
    }
}

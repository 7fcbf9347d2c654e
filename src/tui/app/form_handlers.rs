//! Text editing handlers for the form inputs.
//!
//! Edits apply to the focused field only, and are ignored while a submission
//! is in flight so the submitted text stays on screen until it completes.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Dispatches form edit messages to the focused field.
    pub(super) fn handle_form_edit_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.loading {
            return None;
        }
        let field = self.focus.field()?;

        match msg {
            AppMsg::InsertChar(character) => {
                self.form.insert_char(field, *character);
            }
            AppMsg::InsertNewline => {
                self.form.insert_char(field, '\n');
            }
            AppMsg::Backspace => self.form.backspace(field),
            AppMsg::ClearField => self.form.clear_field(field),
            _ => {
                // Unreachable: caller filters to form edit messages.
            }
        }
        None
    }
}

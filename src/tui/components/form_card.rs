//! The "Submit Review" card: both inputs, the buttons, and the error region.

use crate::tui::state::{Focus, FormField, ReviewForm};

use super::card::{card_title, push_wrapped};

const DIM: &str = "\x1b[2m";
const ERROR_RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";
const CURSOR: char = '_';
const FOCUS_MARKER: &str = "> ";
const NO_MARKER: &str = "  ";
const REVIEW_TEXT_MIN_ROWS: usize = 4;

/// Inputs for rendering the form card.
#[derive(Debug, Clone, Copy)]
pub struct FormViewContext<'a> {
    /// Current field contents.
    pub form: &'a ReviewForm,
    /// Focused element.
    pub focus: Focus,
    /// Whether a submission is in flight.
    pub loading: bool,
    /// Error region text, if any.
    pub error: Option<&'a str>,
    /// Whether the review list is shown.
    pub list_visible: bool,
    /// Available width in columns.
    pub max_width: usize,
}

/// Renders the form card.
#[must_use]
pub fn render_form(ctx: &FormViewContext<'_>) -> Vec<String> {
    let mut lines = vec![card_title("Submit Review", ctx.max_width)];

    push_field(&mut lines, ctx, FormField::ProductName);
    push_field(&mut lines, ctx, FormField::ReviewText);
    lines.push(String::new());

    let analyze_label = if ctx.loading {
        "[ Analyzing... ]"
    } else {
        "[ Analyze Review ]"
    };
    lines.push(button(analyze_label, ctx.focus == Focus::AnalyzeButton));

    if let Some(error) = ctx.error {
        let mut error_rows = Vec::new();
        push_wrapped(
            &mut error_rows,
            &format!("Error: {error}"),
            NO_MARKER,
            ctx.max_width,
        );
        lines.extend(
            error_rows
                .into_iter()
                .map(|row| format!("{ERROR_RED}{row}{RESET}")),
        );
    }

    let toggle_label = if ctx.list_visible {
        "[ Hide All Reviews ]"
    } else {
        "[ View All Reviews ]"
    };
    lines.push(button(toggle_label, ctx.focus == Focus::ReviewsButton));

    lines
}

fn button(label: &str, focused: bool) -> String {
    let marker = if focused { FOCUS_MARKER } else { NO_MARKER };
    format!("{marker}{label}")
}

fn push_field(lines: &mut Vec<String>, ctx: &FormViewContext<'_>, field: FormField) {
    let focused = ctx.focus.field() == Some(field);
    let marker = if focused { FOCUS_MARKER } else { NO_MARKER };
    lines.push(format!("{marker}{}", field.label()));

    let value = ctx.form.value(field);
    let show_cursor = focused && !ctx.loading;
    let start = lines.len();
    if value.is_empty() {
        let cursor = if show_cursor { CURSOR } else { ' ' };
        lines.push(format!("{NO_MARKER}{cursor} {DIM}{}{RESET}", field.placeholder()));
    } else {
        let mut shown = value.to_owned();
        if show_cursor {
            shown.push(CURSOR);
        }
        push_wrapped(lines, &shown, "    ", ctx.max_width);
    }

    if field.is_multiline() {
        let rows = lines.len() - start;
        lines.extend(
            std::iter::repeat_with(String::new).take(REVIEW_TEXT_MIN_ROWS.saturating_sub(rows)),
        );
    }
}

//! Shared card chrome: titled rules and indented wrapped text.

use unicode_width::UnicodeWidthStr;

use super::text_wrap::wrap_words;

const RULE: char = '─';
const INDENT: &str = "  ";

/// Renders a title rule such as `── Analysis Results ──────`.
#[must_use]
pub fn card_title(title: &str, max_width: usize) -> String {
    let prefix = format!("{RULE}{RULE} {title} ");
    let fill = max_width.saturating_sub(prefix.width());
    let mut line = prefix;
    line.extend(std::iter::repeat_n(RULE, fill));
    line
}

/// Renders a section label followed by its wrapped, indented value.
pub(crate) fn push_section(lines: &mut Vec<String>, label: &str, value: &str, max_width: usize) {
    lines.push(label.to_owned());
    push_indented(lines, value, max_width);
}

/// Wraps `text` and pushes each row with a two-column indent.
pub(crate) fn push_indented(lines: &mut Vec<String>, text: &str, max_width: usize) {
    push_wrapped(lines, text, INDENT, max_width);
}

/// Wraps `text` to fit after `indent` and pushes each prefixed row.
pub(crate) fn push_wrapped(lines: &mut Vec<String>, text: &str, indent: &str, max_width: usize) {
    let available = max_width.saturating_sub(indent.width()).max(1);
    lines.extend(
        wrap_words(text, available)
            .into_iter()
            .map(|row| format!("{indent}{row}")),
    );
}

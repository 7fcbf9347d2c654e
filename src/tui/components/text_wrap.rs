//! Width-aware word wrapping for terminal display.
//!
//! Widths are measured in terminal columns with `unicode-width`, so CJK text
//! and emoji wrap at the right place. Explicit line breaks in the input are
//! kept, and blank lines survive as empty output lines.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps `text` to at most `max_width` columns per line.
///
/// Words are split at whitespace; a word wider than `max_width` is
/// hard-wrapped. A `max_width` of zero disables wrapping.
///
/// # Examples
///
/// ```
/// use sentia::tui::components::wrap_words;
///
/// assert_eq!(
///     wrap_words("great battery life", 10),
///     vec!["great".to_owned(), "battery".to_owned(), "life".to_owned()]
/// );
/// ```
#[must_use]
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.lines().map(str::to_owned).collect();
    }

    let mut wrapped = Vec::new();
    for line in text.split('\n') {
        wrap_line(line.trim_end_matches('\r'), max_width, &mut wrapped);
    }
    wrapped
}

fn wrap_line(line: &str, max_width: usize, out: &mut Vec<String>) {
    if line.width() <= max_width {
        out.push(line.to_owned());
        return;
    }

    let first_line = out.len();
    let mut current = String::new();
    let mut current_width = 0_usize;

    for word in line.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            out.push(std::mem::take(&mut current));
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            current_width = hard_wrap(word, max_width, &mut current, out);
        }
    }

    if current_width > 0 || out.len() == first_line {
        out.push(current);
    }
}

/// Splits an over-long word into full-width chunks.
///
/// Complete chunks go to `out`; the trailing partial chunk is left in
/// `current` and its width returned.
fn hard_wrap(word: &str, max_width: usize, current: &mut String, out: &mut Vec<String>) -> usize {
    let mut width = 0_usize;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width && width > 0 {
            out.push(std::mem::take(current));
            width = 0;
        }
        current.push(ch);
        width += ch_width;
    }
    width
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use unicode_width::UnicodeWidthStr;

    use super::wrap_words;

    #[test]
    fn short_lines_pass_through() {
        assert_eq!(wrap_words("fine", 20), vec!["fine"]);
    }

    #[test]
    fn explicit_line_breaks_and_blank_lines_are_kept() {
        assert_eq!(wrap_words("one\n\ntwo", 20), vec!["one", "", "two"]);
    }

    #[test]
    fn long_words_are_hard_wrapped() {
        assert_eq!(
            wrap_words("supercalifragilistic", 8),
            vec!["supercal", "ifragili", "stic"]
        );
    }

    #[test]
    fn words_after_a_hard_wrapped_word_join_its_tail() {
        assert_eq!(
            wrap_words("ab supercalifragilistic cd", 8),
            vec!["ab", "supercal", "ifragili", "stic cd"]
        );
    }

    #[test]
    fn wide_characters_count_as_two_columns() {
        let lines = wrap_words("電池持ちが良い", 6);
        assert!(lines.iter().all(|line| line.width() <= 6));
        assert_eq!(lines.concat(), "電池持ちが良い");
    }

    #[rstest]
    #[case(5)]
    #[case(12)]
    #[case(30)]
    fn no_line_exceeds_width(#[case] width: usize) {
        let text = "The battery lasts two full days and the screen is bright outdoors";
        for line in wrap_words(text, width) {
            assert!(line.width() <= width, "{line:?} exceeds {width}");
        }
    }

    #[test]
    fn zero_width_disables_wrapping() {
        assert_eq!(wrap_words("a b c", 0), vec!["a b c"]);
    }
}

//! Frame normalisation to the terminal size.
//!
//! Components can leave stale trailing cells behind when a row is shorter
//! than the one drawn in the previous frame, especially after a resize. Every
//! frame is therefore clamped to exactly `height` rows, each padded or
//! truncated to one column less than the terminal width to avoid autowrap.
//! ANSI escape sequences are copied through without counting towards the
//! width, and a reset is appended to any row that leaves styling active.

use unicode_width::UnicodeWidthChar;

const ANSI_RESET: &str = "\x1b[0m";

/// Pads or truncates `frame` to `width` x `height` terminal cells.
#[must_use]
pub fn normalise_frame(frame: &str, width: u16, height: u16) -> String {
    let safe_width = usize::from(width.max(1)).saturating_sub(1).max(1);
    let rows = usize::from(height.max(1));

    let mut output = String::new();
    let mut emitted = 0_usize;
    for line in frame.lines().take(rows) {
        output.push_str(&fit_line(line, safe_width));
        output.push('\n');
        emitted += 1;
    }

    let blank = " ".repeat(safe_width);
    for _ in emitted..rows {
        output.push_str(&blank);
        output.push('\n');
    }
    output
}

/// Fits one row to exactly `width` visible columns.
#[must_use]
pub fn fit_line(line: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(line.len() + width);
    let mut scanner = AnsiScanner::default();
    let mut visible = 0_usize;

    for ch in line.chars() {
        if scanner.consume(ch) {
            fitted.push(ch);
            continue;
        }

        let ch_width = ch.width().unwrap_or(0);
        if visible + ch_width > width {
            break;
        }
        fitted.push(ch);
        visible += ch_width;
    }

    fitted.push_str(&" ".repeat(width.saturating_sub(visible)));
    if scanner.styled && !scanner.reset_last {
        fitted.push_str(ANSI_RESET);
    }
    fitted
}

/// Tracks whether the scan is inside an escape sequence.
#[derive(Debug, Default)]
struct AnsiScanner {
    in_sequence: bool,
    styled: bool,
    reset_last: bool,
    pending: String,
}

impl AnsiScanner {
    /// Returns `true` when `ch` belongs to an escape sequence.
    fn consume(&mut self, ch: char) -> bool {
        if ch == '\x1b' {
            self.in_sequence = true;
            self.styled = true;
            self.pending.clear();
            self.pending.push(ch);
            return true;
        }

        if !self.in_sequence {
            return false;
        }

        self.pending.push(ch);
        if ch.is_ascii_alphabetic() {
            self.in_sequence = false;
            self.reset_last = self.pending == ANSI_RESET || self.pending == "\x1b[m";
        }
        true
    }
}

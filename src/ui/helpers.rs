//! Shared rendering utilities.
//!
//! Components write into a [`Frame`], an in-memory buffer of text and ANSI
//! escape sequences that the renderer prints in one go. Keeping output in a
//! buffer lets tests inspect exactly what would reach the terminal.

use crate::ui::theme::Theme;
use std::fmt::Write as _;

/// Buffered ANSI output for one render pass.
#[derive(Debug, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed `row` and `col`.
    pub fn goto(&mut self, row: usize, col: usize) {
        let _ = write!(self.buf, "\u{1b}[{row};{col}H");
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn spaces(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    pub fn reset(&mut self) {
        self.buf.push_str(Theme::reset());
    }

    /// Writes `text` centered in `width` columns, padding both sides.
    pub fn centered(&mut self, text: &str, width: usize) {
        let len = text.chars().count().min(width);
        let left = (width - len) / 2;
        self.spaces(left);
        self.buf.extend(text.chars().take(len));
        self.spaces(width - len - left);
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Writes `text` with the char-index `ranges` drawn in match colors.
///
/// When `restore` is set, those escape sequences are re-applied after each
/// highlighted section so row styling (e.g. selection) continues.
pub fn push_highlighted(
    frame: &mut Frame,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
) {
    if ranges.is_empty() {
        frame.push(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        frame.push(&chars[pos..start].iter().collect::<String>());
        frame.push(&Theme::fg(&theme.colors.match_highlight_fg));
        frame.push(&Theme::bg(&theme.colors.match_highlight_bg));
        frame.push(&chars[start..end].iter().collect::<String>());
        frame.reset();
        frame.push(restore);

        pos = end;
    }

    frame.push(&chars[pos..].iter().collect::<String>());
}

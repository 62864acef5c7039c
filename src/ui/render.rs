use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::ansi;
use crate::ui::viewport::ViewportState;

/// Text drawn at the start of every row.
pub const ROW_MARKER: char = '~';

/// Welcome text shown a third of the way down the screen.
pub const DEFAULT_WELCOME: &str = "Welcome to tilde :)";

/// How the welcome banner behaves when it is wider than the viewport.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// Cut the banner row so it never exceeds the viewport width.
    #[default]
    Message,
    /// Legacy output: cut the rows drawn so far to `width` bytes and append
    /// the full message.
    Line,
}

/// The welcome banner and its overflow policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub truncation: Truncation,
}

impl Banner {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            truncation: Truncation::default(),
        }
    }

    #[must_use]
    pub const fn with_truncation(mut self, truncation: Truncation) -> Self {
        self.truncation = truncation;
        self
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(DEFAULT_WELCOME)
    }
}

/// Render one full frame for `state`.
///
/// The frame hides the cursor, homes it, draws every row, moves the cursor
/// to its cell and shows it again.
pub fn render(state: &ViewportState, banner: &Banner) -> String {
    let rows = draw_rows(state, banner);
    let mut frame = String::with_capacity(rows.len() + 32);
    frame.push_str(ansi::HIDE_CURSOR);
    frame.push_str(ansi::CURSOR_HOME);
    frame.push_str(&rows);
    ansi::cursor_to(
        &mut frame,
        u32::from(state.cursor_y()) + 1,
        u32::from(state.cursor_x()) + 1,
    );
    frame.push_str(ansi::SHOW_CURSOR);
    frame
}

/// Draw the marker rows, with the banner on row `height / 3`.
///
/// Each row ends with an erase-to-end-of-line; rows are separated by CRLF
/// with none after the last.
pub fn draw_rows(state: &ViewportState, banner: &Banner) -> String {
    let width = usize::from(state.width());
    let height = state.height();
    let banner_row = height / 3;

    let mut rows = String::with_capacity(usize::from(height) * 8 + banner.text.len());
    for y in 0..height {
        if y == banner_row {
            push_banner(&mut rows, width, banner);
        } else {
            rows.push(ROW_MARKER);
        }
        rows.push_str(ansi::CLEAR_LINE);
        if y < height - 1 {
            rows.push_str(ansi::NEWLINE);
        }
    }
    rows
}

fn push_banner(rows: &mut String, width: usize, banner: &Banner) {
    let text = banner.text.as_str();
    let text_width = text.width();
    let padding = width.saturating_sub(text_width) / 2;

    match banner.truncation {
        Truncation::Message => {
            let room = width.saturating_sub(1 + padding);
            rows.push(ROW_MARKER);
            push_spaces(rows, padding);
            rows.push_str(truncate_to_width(text, room));
        }
        Truncation::Line => {
            if text_width > width {
                truncate_bytes(rows, width);
            }
            rows.push(ROW_MARKER);
            push_spaces(rows, padding);
            rows.push_str(text);
        }
    }
}

fn push_spaces(rows: &mut String, count: usize) {
    rows.extend(std::iter::repeat_n(' ', count));
}

/// Longest prefix of `text` that fits in `max_width` columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > max_width {
            return &text[..idx];
        }
    }
    text
}

/// Keep at most `max_len` bytes, backing off to a char boundary.
fn truncate_bytes(text: &mut String, max_len: usize) {
    if text.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

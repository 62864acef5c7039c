//! VT100 control sequences written to the terminal.
//!
//! | Sequence            | Description                         |
//! |---------------------|-------------------------------------|
//! | `ESC [ ? 25 l/h`    | Hide / show cursor                  |
//! | `ESC [ H`           | Cursor to (1, 1)                    |
//! | `ESC [ row ; col H` | Cursor position (1-indexed)         |
//! | `ESC [ K`           | Erase from cursor to end of line    |
//! | `ESC [ 2 J`         | Erase display                       |

use std::fmt::Write;

pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";
pub const CURSOR_HOME: &str = "\x1b[H";
pub const CLEAR_LINE: &str = "\x1b[K";

/// Home the cursor and erase the whole display. Emitted once on exit.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Row separator in raw mode, where output post-processing is off.
pub const NEWLINE: &str = "\r\n";

/// Append a cursor position sequence for the 1-indexed `(row, col)`.
pub fn cursor_to(out: &mut String, row: u32, col: u32) {
    // Writing into a String cannot fail.
    let _ = write!(out, "\x1b[{row};{col}H");
}

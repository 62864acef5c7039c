//! Terminal screen output.
//!
//! This module contains all drawing code:
//! - [`viewport`]: Terminal dimensions and cursor position
//! - [`ansi`]: Control sequences written to the terminal
//! - [`render`]: Frame composition

pub mod ansi;
pub mod viewport;

mod render;

pub use render::{
    Banner, DEFAULT_WELCOME, ROW_MARKER, Truncation, draw_rows, render, truncate_to_width,
};

// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. terminal::TerminalMode)
    clippy::module_name_repetitions
)]

//! # Tilde
//!
//! A minimal raw-mode terminal screen with a movable cursor.
//!
//! Tilde puts the terminal into raw mode and:
//! - Decodes keypresses, including arrow and page escape sequences
//! - Moves a cursor that never leaves the screen
//! - Redraws a marker column and a centered welcome banner after every key
//!
//! Ctrl+Q clears the screen and exits.
//!
//! ## Architecture
//!
//! Tilde uses The Elm Architecture (TEA) pattern:
//! - **Model**: [`ViewportState`](ui::viewport::ViewportState)
//! - **Message**: [`KeyEvent`](input::KeyEvent)
//! - **Update**: [`apply_key`](app::apply_key)
//! - **View**: [`render`](ui::render)
//!
//! ## Modules
//!
//! - [`app`]: Main loop and state transitions
//! - [`input`]: Keypress decoding
//! - [`ui`]: Frame rendering and cursor state
//! - [`terminal`]: Raw mode and size queries
//! - [`logging`]: Tracing setup

pub mod app;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, apply_key};
    pub use crate::input::{KeyEvent, decode};
    pub use crate::ui::viewport::ViewportState;
    pub use crate::ui::{Banner, Truncation, render};
}

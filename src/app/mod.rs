//! Screen state updates and the main loop.
//!
//! This module follows The Elm Architecture (TEA):
//! - [`ViewportState`](crate::ui::viewport::ViewportState): the whole state
//! - [`KeyEvent`](crate::input::KeyEvent): the only message
//! - [`apply_key`]: pure state transitions
//! - [`App::run`]: main loop with rendering

mod event_loop;
mod update;

pub use event_loop::{ExitReason, LoopExit, event_loop};
pub use update::apply_key;

use crate::ui::{Banner, Truncation};

/// Main application struct that owns the screen options and runs the loop.
#[derive(Debug, Clone, Default)]
pub struct App {
    banner: Banner,
}

impl App {
    /// Create an application with the default welcome banner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the welcome banner text.
    #[must_use]
    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        self.banner.text = text.into();
        self
    }

    /// Set how an over-wide banner is cut.
    #[must_use]
    pub const fn with_truncation(mut self, truncation: Truncation) -> Self {
        self.banner.truncation = truncation;
        self
    }

    pub const fn banner(&self) -> &Banner {
        &self.banner
    }
}

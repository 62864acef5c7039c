//! Raw-mode terminal control.
//!
//! [`TerminalMode`] is the seam between the screen loop and the real
//! terminal: entering raw mode, restoring the previous mode and querying
//! the grid size. [`CrosstermTerminal`] implements it for the process's
//! controlling terminal. [`RawModeGuard`] ties raw mode to a scope so the
//! terminal is restored on every exit path, including unwinding.

mod error;

pub use error::TerminalError;

/// Terminal mode operations the screen loop depends on.
pub trait TerminalMode {
    /// Switch input to unbuffered, unechoed bytes.
    ///
    /// # Errors
    /// Returns [`TerminalError::RawMode`] if the terminal cannot be configured.
    fn enter_raw_mode(&mut self) -> Result<(), TerminalError>;

    /// Restore the mode saved by [`TerminalMode::enter_raw_mode`].
    ///
    /// # Errors
    /// Returns [`TerminalError::Restore`] if the saved mode cannot be applied.
    fn restore_mode(&mut self) -> Result<(), TerminalError>;

    /// Terminal size as `(width, height)` in cells.
    ///
    /// # Errors
    /// Returns [`TerminalError::SizeQuery`] if the size cannot be read, or
    /// [`TerminalError::EmptyViewport`] if either dimension is zero.
    fn viewport_size(&self) -> Result<(u16, u16), TerminalError>;
}

/// The controlling terminal, driven through crossterm.
///
/// crossterm keeps the original termios itself, so restoring needs no
/// state on this side.
#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl CrosstermTerminal {
    pub const fn new() -> Self {
        Self
    }
}

impl TerminalMode for CrosstermTerminal {
    fn enter_raw_mode(&mut self) -> Result<(), TerminalError> {
        crossterm::terminal::enable_raw_mode().map_err(TerminalError::RawMode)
    }

    fn restore_mode(&mut self) -> Result<(), TerminalError> {
        crossterm::terminal::disable_raw_mode().map_err(TerminalError::Restore)
    }

    fn viewport_size(&self) -> Result<(u16, u16), TerminalError> {
        let (width, height) = crossterm::terminal::size().map_err(TerminalError::SizeQuery)?;
        checked_size(width, height)
    }
}

/// Reject a size with a zero dimension.
///
/// # Errors
/// Returns [`TerminalError::EmptyViewport`] when `width` or `height` is 0.
pub fn checked_size(width: u16, height: u16) -> Result<(u16, u16), TerminalError> {
    if width == 0 || height == 0 {
        return Err(TerminalError::EmptyViewport { width, height });
    }
    Ok((width, height))
}

/// Holds a terminal in raw mode until dropped or [`RawModeGuard::restore`]d.
pub struct RawModeGuard<'a, T: TerminalMode> {
    terminal: &'a mut T,
    active: bool,
}

impl<'a, T: TerminalMode> RawModeGuard<'a, T> {
    /// Enter raw mode on `terminal`.
    ///
    /// # Errors
    /// Propagates the failure from [`TerminalMode::enter_raw_mode`]; the
    /// terminal is left untouched in that case.
    pub fn enter(terminal: &'a mut T) -> Result<Self, TerminalError> {
        terminal.enter_raw_mode()?;
        tracing::debug!("terminal raw mode enabled");
        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn terminal(&self) -> &T {
        &*self.terminal
    }

    /// Restore the terminal now and report the outcome.
    ///
    /// # Errors
    /// Returns [`TerminalError::Restore`] if the previous mode cannot be applied.
    pub fn restore(mut self) -> Result<(), TerminalError> {
        self.active = false;
        self.terminal.restore_mode()?;
        tracing::debug!("terminal raw mode disabled");
        Ok(())
    }
}

impl<T: TerminalMode> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        match self.terminal.restore_mode() {
            Ok(()) => tracing::debug!("terminal raw mode disabled on drop"),
            Err(err) => tracing::warn!(%err, "failed to restore terminal mode"),
        }
    }
}

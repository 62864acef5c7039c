//! Terminal setup errors.

/// Errors raised while configuring the controlling terminal.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Failed to enter raw mode: {0}")]
    RawMode(#[source] std::io::Error),

    #[error("Failed to restore terminal mode: {0}")]
    Restore(#[source] std::io::Error),

    #[error("Failed to query terminal size: {0}")]
    SizeQuery(#[source] std::io::Error),

    #[error("Terminal reported an empty viewport ({width}x{height})")]
    EmptyViewport { width: u16, height: u16 },
}

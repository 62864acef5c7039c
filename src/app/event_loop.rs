use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use crate::app::{App, apply_key};
use crate::input::{MAX_SEQUENCE_LEN, decode};
use crate::terminal::{CrosstermTerminal, RawModeGuard, TerminalMode};
use crate::ui::viewport::ViewportState;
use crate::ui::{Banner, ansi, render};

/// Why the screen loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Ctrl+Q was pressed.
    Quit,
    /// The input stream was closed.
    EndOfInput,
}

/// Final state of a finished screen loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopExit {
    pub state: ViewportState,
    pub reason: ExitReason,
    pub frames: u64,
}

impl App {
    /// Run on the controlling terminal with stdin and stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the size query fails (before any
    /// frame is drawn), or if reading input or writing a frame fails. The
    /// terminal mode is restored in every case.
    pub fn run(&self) -> Result<()> {
        let mut terminal = CrosstermTerminal::new();
        let stdin = io::stdin();
        let stdout = io::stdout();
        let exit = self.run_on(&mut terminal, &mut stdin.lock(), &mut stdout.lock())?;
        tracing::info!(reason = ?exit.reason, frames = exit.frames, "session ended");
        Ok(())
    }

    /// Run against any terminal mode service and byte streams.
    ///
    /// # Errors
    ///
    /// See [`App::run`].
    pub fn run_on<T, R, W>(&self, terminal: &mut T, input: &mut R, output: &mut W) -> Result<LoopExit>
    where
        T: TerminalMode,
        R: Read,
        W: Write,
    {
        let guard = RawModeGuard::enter(terminal).context("Failed to initialize terminal")?;
        let (width, height) = guard
            .terminal()
            .viewport_size()
            .context("Failed to initialize terminal")?;
        tracing::info!(width, height, "viewport ready");

        let state = ViewportState::new(width, height);
        let exit = event_loop(input, output, state, &self.banner)?;

        guard.restore().context("Failed to restore terminal")?;
        Ok(exit)
    }
}

/// Draw, read one keypress, update; repeat until quit or end of input.
///
/// Each frame is written and flushed before the next read blocks. On exit
/// the screen is cleared.
///
/// # Errors
///
/// Returns an error if a read (other than an interrupted one) or a write fails.
pub fn event_loop<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    mut state: ViewportState,
    banner: &Banner,
) -> Result<LoopExit> {
    let mut buf = [0u8; MAX_SEQUENCE_LEN];
    let mut frames: u64 = 0;

    let reason = loop {
        let frame = render(&state, banner);
        output
            .write_all(frame.as_bytes())
            .and_then(|()| output.flush())
            .context("Failed to draw frame")?;
        frames += 1;
        tracing::trace!(frame = frames, bytes = frame.len(), "frame drawn");

        let n = read_chunk(input, &mut buf).context("Failed to read input")?;
        if n == 0 {
            break ExitReason::EndOfInput;
        }

        let key = decode(&buf[..n]);
        tracing::trace!(?key, bytes = ?&buf[..n], "key decoded");
        if key.is_quit() {
            break ExitReason::Quit;
        }
        let next = apply_key(state, key);
        if next != state {
            tracing::debug!(cursor = ?next.cursor(), "cursor moved");
        }
        state = next;
    };

    output
        .write_all(ansi::CLEAR_SCREEN.as_bytes())
        .and_then(|()| output.flush())
        .context("Failed to clear screen")?;

    Ok(LoopExit {
        state,
        reason,
        frames,
    })
}

/// One blocking read of up to [`MAX_SEQUENCE_LEN`] bytes.
fn read_chunk<R: Read>(input: &mut R, buf: &mut [u8; MAX_SEQUENCE_LEN]) -> io::Result<usize> {
    loop {
        match input.read(buf) {
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            result => return result,
        }
    }
}

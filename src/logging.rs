//! Tracing subscriber setup.
//!
//! Stdout carries the screen and stderr shares the same terminal, so
//! anything beyond warnings goes to a log file when one is configured.
//! The filter is fixed; no environment variable changes it.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter directive for the chosen destination.
pub const fn default_directive(to_file: bool) -> &'static str {
    if to_file { "tilde=debug,warn" } else { "warn" }
}

fn filter(to_file: bool) -> EnvFilter {
    EnvFilter::new(default_directive(to_file))
}

/// Install the global subscriber, writing to `log_file` or stderr.
///
/// # Errors
/// Returns an error if the log file cannot be created or a global
/// subscriber is already installed.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let result = if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter(true))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter(false))
            .with_writer(std::io::stderr)
            .try_init()
    };
    result.map_err(|err| anyhow::anyhow!(err).context("Failed to initialize logging"))
}

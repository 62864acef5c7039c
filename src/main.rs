//! Tilde - a minimal raw-mode terminal screen.
//!
//! # Usage
//!
//! ```bash
//! tilde
//! tilde --message "Hello there"
//! tilde --truncate line --log-file tilde.log
//! ```
//!
//! Move with the arrow keys and Page Up / Page Down; Ctrl+Q quits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tilde::app::App;
use tilde::logging;
use tilde::ui::Truncation;

/// A minimal raw-mode terminal screen with a movable cursor
#[derive(Parser, Debug)]
#[command(name = "tilde", version, about, long_about = None)]
struct Cli {
    /// Welcome banner text
    #[arg(long, value_name = "TEXT")]
    message: Option<String>,

    /// How to cut a banner wider than the screen
    #[arg(long, value_enum, value_name = "POLICY")]
    truncate: Option<Truncation>,

    /// Write debug logs to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Build the app from the flags alone; no flags means the stock screen.
    fn app(&self) -> App {
        let mut app = App::new();
        if let Some(message) = &self.message {
            app = app.with_message(message.clone());
        }
        if let Some(truncation) = self.truncate {
            app = app.with_truncation(truncation);
        }
        app
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;
    tracing::debug!(?cli, "parsed flags");

    cli.app().run().context("Application error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilde::ui::Banner;

    #[test]
    fn test_no_arguments_gives_stock_screen() {
        let cli = Cli::try_parse_from(["tilde"]).unwrap();
        assert_eq!(cli.app().banner(), &Banner::default());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_flags_reach_the_banner() {
        let cli = Cli::try_parse_from(["tilde", "--message", "hi there", "--truncate", "line"])
            .unwrap();
        let app = cli.app();
        assert_eq!(app.banner().text, "hi there");
        assert_eq!(app.banner().truncation, Truncation::Line);
    }

    #[test]
    fn test_saved_defaults_flags_are_gone() {
        assert!(Cli::try_parse_from(["tilde", "--save"]).is_err());
        assert!(Cli::try_parse_from(["tilde", "--clear"]).is_err());
    }
}

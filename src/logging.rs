//! Tracing subscriber setup for the binary
//!
//! Verbosity comes from `RUST_LOG` (default `warn`). Events go to a log file
//! when one is given, otherwise to stderr. The TUI owns the terminal, so it
//! only logs when a file is given.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Where log events should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Do not install a subscriber
    Off,
    Stderr,
    File(&'a Path),
}

impl<'a> LogTarget<'a> {
    /// Pick a target for a front end
    ///
    /// A log file always wins. Without one, terminal-owning front ends get no
    /// logging at all.
    #[must_use]
    pub const fn select(log_file: Option<&'a Path>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Off,
            None => Self::Stderr,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber for `target`
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
            .context("failed to install log subscriber"),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .with_context(|| format!("could not open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(env_filter())
                .with(
                    fmt::layer()
                        .with_writer(Arc::new(file))
                        .with_ansi(false),
                )
                .try_init()
                .context("failed to install log subscriber")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_prefers_log_file() {
        let path = Path::new("session.log");
        assert_eq!(LogTarget::select(Some(path), true), LogTarget::File(path));
        assert_eq!(LogTarget::select(Some(path), false), LogTarget::File(path));
    }

    #[test]
    fn select_keeps_tui_quiet_without_file() {
        assert_eq!(LogTarget::select(None, true), LogTarget::Off);
        assert_eq!(LogTarget::select(None, false), LogTarget::Stderr);
    }

    #[test]
    fn init_off_is_a_no_op() {
        assert!(init(LogTarget::Off).is_ok());
    }
}

//! Logging for learnhub.
//!
//! Every create request logs its terminal state (created, rejected, storage
//! or persist failure) through `tracing`; the HTTP trace layer adds one span
//! per request. This module wires those events to stdout and, when a log file
//! is configured, to that file as well.
//!
//! `RUST_LOG` replaces the configured filter entirely when it is set.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Crates whose chatter is capped at `warn` regardless of the configured level.
const QUIET_CRATES: &[&str] = &["sqlx", "hyper"];

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Filter for `level` with the noisy dependencies held back.
fn default_filter(level: Level) -> EnvFilter {
    let mut directives = level.as_str().to_ascii_lowercase();
    for krate in QUIET_CRATES {
        directives.push_str(&format!(",{krate}=warn"));
    }
    EnvFilter::new(directives)
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(parse_level(level)))
}

/// Install the global subscriber: stdout plus the configured log file.
///
/// The log file is appended to, so history survives restarts. Its parent
/// directory is created if needed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let path = Path::new(&config.file);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let log_file = Arc::new(OpenOptions::new().create(true).append(true).open(path)?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout.and(log_file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(build_filter(&config.level))
        .init();

    Ok(())
}

/// Install a stdout-only subscriber; the fallback when the log file cannot be opened.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(build_filter(level))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("warning"), Level::WARN);
        assert_eq!(parse_level("Error"), Level::ERROR);
        assert_eq!(parse_level("verbose"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_default_filter_quiets_dependencies() {
        let filter = default_filter(Level::DEBUG).to_string().to_lowercase();
        assert!(filter.contains("debug"));
        assert!(filter.contains("sqlx=warn"));
        assert!(filter.contains("hyper=warn"));
    }
}

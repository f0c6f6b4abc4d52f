//! Logging setup.
//!
//! While the TUI owns the terminal, log output goes to a file; in
//! non-interactive modes it goes to stderr. The filter comes from the
//! `--log-level` flag, then `RUST_LOG`, then the configured level.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to the configured log file
    File,
    /// Write to stderr
    Stderr,
}

/// Builds the filter: a valid `level_override`, else `RUST_LOG` if set and
/// valid, else `configured`.
fn env_filter(level_override: Option<&str>, configured: &str) -> EnvFilter {
    level_override
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(configured))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails when the log file cannot be opened or a subscriber is already set.
pub fn init(config: &LoggingConfig, level_override: Option<&str>, target: LogTarget) -> Result<()> {
    match target {
        LogTarget::File => {
            let path = config.file_path()?;
            let file = open_log_file(&path)?;
            tracing_subscriber::registry()
                .with(env_filter(level_override, &config.level))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
            tracing::debug!(path = %path.display(), "Logging to file");
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter(level_override, &config.level))
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }

    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create log directory: {}",
            parent.display()
        ))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Failed to open log file: {}", path.display()))
}

//! Tracing setup. Logs go to a daily rolling file so the terminal UI
//! never has its screen written over.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "alt-for-sam.log";

/// Platform data directory for log files, created if missing.
pub fn log_dir() -> Result<PathBuf> {
    let mut path = dirs::data_dir().context("Unable to determine data directory for your platform")?;

    path.push("alt-for-sam");
    path.push("logs");

    std::fs::create_dir_all(&path).context("Failed to create alt-for-sam log directory")?;

    Ok(path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. The returned guard must be held for
/// the life of the program so buffered lines are flushed.
pub fn init_logging() -> Option<WorkerGuard> {
    match log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let installed = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .is_ok();

            installed.then_some(guard)
        }
        Err(e) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
            tracing::warn!("File logging unavailable, using stderr: {e:#}");
            None
        }
    }
}

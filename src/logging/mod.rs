//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events go to a daily-rotated file
//! `talentdesk.<YYYY-MM-DD>.log` in the configured log directory (default:
//! `~/.local/share/talentdesk/logs/`). A session running past midnight rolls
//! over to the new day's file. Nothing is ever written to the terminal,
//! which belongs to the UI.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Keeps the background log writer alive. Dropping it flushes pending lines.
pub struct LogGuard {
    pub dir: PathBuf,
    _worker: WorkerGuard,
}

/// Expand a leading `~` in the configured directory.
fn resolve_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(log_dir)
}

fn file_appender(log_dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("talentdesk")
        .filename_suffix("log")
        .build(log_dir)
        .with_context(|| format!("Failed to open log file in {}", log_dir.display()))
}

/// Install the global subscriber. Returns `None` when logging is disabled.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> Result<Option<LogGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = resolve_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let (writer, worker) = tracing_appender::non_blocking(file_appender(&log_dir)?);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(LogGuard {
        dir: log_dir,
        _worker: worker,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LoggingConfig::default();
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn test_appender_writes_dated_file() {
        let dir = std::env::temp_dir().join(format!("talentdesk-logs-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let mut appender = file_appender(&dir).unwrap();
        appender.write_all(b"session started\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("talentdesk."));
        assert!(names[0].ends_with(".log"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_resolve_log_dir() {
        assert_eq!(resolve_log_dir("/var/log/td"), PathBuf::from("/var/log/td"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_log_dir("~/logs"), home.join("logs"));
        }
    }
}

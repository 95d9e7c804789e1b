//! Diagnostic logging to disk.
//!
//! When a log directory is configured, `tracing` events are written to
//! `<log_dir>/viewstate.log`. Without one, no subscriber is installed so a
//! full-screen terminal host keeps a clean screen.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "viewstate.log";

/// Installs the global subscriber. Returns `false` when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let Some(log_dir) = config.log_dir.as_deref() else {
        return Ok(false);
    };

    let log_dir = resolve_log_dir(log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;
    Ok(true)
}

/// `RUST_LOG` wins over the configured level.
fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level '{level}'")),
    }
}

/// Expands a leading `~` to the home directory.
fn resolve_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_dir() {
        assert!(!init(&LoggingConfig::default()).unwrap());
    }

    #[test]
    fn test_resolve_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_log_dir("~/logs"), home.join("logs"));
        }
        assert_eq!(resolve_log_dir("/var/log/x"), PathBuf::from("/var/log/x"));
    }

    #[test]
    fn test_filter_accepts_levels() {
        assert!(EnvFilter::try_new("debug").is_ok());
        assert!(EnvFilter::try_new("viewstate=trace,warn").is_ok());
    }
}

//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events go to a daily file named
//! `glossa_<date>.log` in the configured log directory (default:
//! `~/.local/share/glossa/logs/`). The terminal belongs to the UI, so
//! nothing is ever written to stdout or stderr.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

/// Install the global subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level: Level = config
        .level
        .parse()
        .with_context(|| format!("Invalid log level {:?}", config.level))?;

    let log_dir = expand_tilde(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let filepath = log_dir.join(format!("glossa_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filepath)
        .with_context(|| format!("Failed to open log file {}", filepath.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %filepath.display(), "logging started");
    Ok(())
}

fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/var/log/glossa"), PathBuf::from("/var/log/glossa"));
        assert_eq!(expand_tilde("logs"), PathBuf::from("logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_disabled_logging_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            enabled: false,
            log_dir: dir.path().join("logs").display().to_string(),
            level: "debug".into(),
        };
        init(&config).unwrap();
        assert!(!dir.path().join("logs").exists());
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let config = LoggingConfig {
            enabled: true,
            log_dir: String::new(),
            level: "chatty".into(),
        };
        assert!(init(&config).is_err());
    }
}

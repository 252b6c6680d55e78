pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glossa")
        .join("config.toml")
}

/// Load the config from `path`, or from the default location when `None`.
/// A missing file at the default location yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = config_path();
            if !default.exists() {
                return Ok(AppConfig::default());
            }
            default
        }
    };
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn parse_config(contents: &str) -> Result<AppConfig> {
    Ok(toml::from_str(contents)?)
}

pub fn save_config(config: &AppConfig, path: Option<&Path>) -> Result<()> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.data.dir, PathBuf::from("./data"));
        assert_eq!(config.ui.show_items_limit, 100);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(
            r#"
            [data]
            dir = "/srv/corpus"

            [ui]
            show_items_limit = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.data.dir, PathBuf::from("/srv/corpus"));
        assert_eq!(config.ui.show_items_limit, 25);
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_save_then_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.logging.enabled = true;
        config.ui.show_items_limit = 7;
        save_config(&config, Some(&path)).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert!(loaded.logging.enabled);
        assert_eq!(loaded.ui.show_items_limit, 7);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[ui\nshow_items_limit = ").is_err());
    }
}

//! TOML settings, read once at startup.
//!
//! The file lives at `<config_dir>/talentdesk/config.toml` unless
//! `TALENTDESK_CONFIG` names another path. A missing file means defaults.

pub mod model;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub use model::{AccountConfig, AppConfig, AuthConfig, LoggingConfig};

pub const CONFIG_ENV: &str = "TALENTDESK_CONFIG";

pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("talentdesk")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_from(&config_path())
}

pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Write the config (`talentdesk --write-config` seeds a file to edit).
pub fn save_config(config: &AppConfig) -> Result<PathBuf> {
    let path = config_path();
    save_to(config, &path)?;
    Ok(path)
}

pub fn save_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))
}

//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use super::get_app_dir;

pub const DEFAULT_DATA_FILE: &str = "tasks.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Task data file; defaults to `tasks.txt` in the app directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    /// Save after every change instead of only on `bye`
    #[serde(default)]
    pub autosave: bool,

    #[serde(default = "default_true")]
    pub backup: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            autosave: false,
            backup: true,
        }
    }
}

impl StorageConfig {
    pub fn data_file_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(expand_home(path)),
            None => Ok(get_app_dir()?.join(DEFAULT_DATA_FILE)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the farewell stays on screen after `bye`
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,

    #[serde(default = "default_true")]
    pub show_greeting: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            exit_delay_ms: default_exit_delay_ms(),
            show_greeting: true,
            user_name: None,
        }
    }
}

impl UiConfig {
    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

fn default_true() -> bool {
    true
}

fn default_exit_delay_ms() -> u64 {
    2000
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Invalid config in {:?}", path))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content).with_context(|| format!("Failed to write config to {:?}", path))?;
    Ok(())
}

//! Session management - app directory, configuration and the chat session

mod chat;
pub mod config;

pub use chat::{Reply, Session};
pub use config::{load_config, save_config, Config, StorageConfig, UiConfig};

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::task::FileStore;

/// Overrides the app directory when set
pub const APP_DIR_ENV: &str = "TASKPAL_HOME";

const APP_DIR_NAME: &str = "taskpal";

/// Directory holding the config file, the default data file and logs.
///
/// `$TASKPAL_HOME` if set, else `$XDG_CONFIG_HOME/taskpal` (or the platform
/// equivalent), else `~/.taskpal`. Created if missing.
pub fn get_app_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(APP_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => default_app_dir()?,
    };

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create app directory {:?}", dir))?;
    Ok(dir)
}

fn default_app_dir() -> Result<PathBuf> {
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join(APP_DIR_NAME));
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot find home directory"))?;
    Ok(home.join(format!(".{}", APP_DIR_NAME)))
}

/// Build the file store, preferring an explicit path over the configured one
pub fn open_store(file: Option<PathBuf>, config: &Config) -> Result<FileStore> {
    let path = match file {
        Some(path) => path,
        None => config.storage.data_file_path()?,
    };
    Ok(FileStore::new(path).with_backup(config.storage.backup))
}

/// Load the stored tasks into a session configured from `config`
pub fn open_session(file: Option<PathBuf>, config: &Config) -> Result<Session<FileStore>> {
    let store = open_store(file, config)?;
    Ok(Session::open(store)?.with_autosave(config.storage.autosave))
}

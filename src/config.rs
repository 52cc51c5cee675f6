//! User configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "echon";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Name the bot introduces itself with
    #[serde(default = "default_name")]
    pub name: String,

    /// Frame each response with divider lines
    #[serde(default = "default_true")]
    pub divider: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            divider: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<String>,

    #[serde(default = "default_true")]
    pub backup: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            tasks_file: None,
            backup: true,
        }
    }
}

fn default_name() -> String {
    "Echon".to_string()
}

fn default_true() -> bool {
    true
}

/// `<config dir>/echon`, created on first use
pub fn get_app_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?;
    let dir = base.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Where the task list lives, honouring `storage.tasks_file`
    pub fn tasks_path(&self) -> Result<PathBuf> {
        match &self.storage.tasks_file {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(get_app_dir()?.join("tasks.json")),
        }
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat_list: ChatListConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatListConfig {
    /// TOML or JSON file holding the materialized thread lists.
    #[serde(default)]
    pub snapshot_path: Option<String>,
}

fn default_data_dir() -> String {
    dirs::home_dir()
        .map(|h| h.join(".chatlist").to_string_lossy().to_string())
        .unwrap_or_else(|| ".chatlist".to_string())
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: AppConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.chat_list.snapshot_path.as_ref().map(PathBuf::from)
    }
}

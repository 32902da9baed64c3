use crate::tree::TreeConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "sfx";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the user config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Settings passed to the suffix tree builder
    #[serde(default)]
    pub tree: TreeConfig,

    /// Print occurrence positions in ascending order
    #[serde(default = "default_sort_positions")]
    pub sort_positions: bool,

    /// Show a progress bar when indexing texts longer than this many bytes
    #[serde(default = "default_progress_threshold")]
    pub progress_threshold: usize,
}

fn default_sort_positions() -> bool {
    true
}

fn default_progress_threshold() -> usize {
    1024 * 1024 // 1MB
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tree: TreeConfig::default(),
            sort_positions: default_sort_positions(),
            progress_threshold: default_progress_threshold(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load config from an explicit file, or return default if it does not exist
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to an explicit file
    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Whether a text of `text_len` bytes deserves a progress bar
    pub fn wants_progress(&self, text_len: usize) -> bool {
        text_len > self.progress_threshold
    }
}

/// Get the path to the config file (`SFX_CONFIG` overrides the default)
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os("SFX_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}

//! Configuration management

use crate::domain::Category;
use crate::error::{Result, TwolistError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-root state directory
pub const STATE_DIR: &str = ".twolist";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Category selected for list/add/remove when none is given
    #[serde(default)]
    pub category: Category,
    /// Tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            category: Category::default(),
            log: default_log_filter(),
        }
    }
}

impl Config {
    /// Load config from .twolist/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STATE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TwolistError::NotTwolistDirectory(path.to_path_buf())
            } else {
                TwolistError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TwolistError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .twolist/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let state_dir = path.join(STATE_DIR);
        let config_path = state_dir.join("config.toml");

        if !state_dir.exists() {
            fs::create_dir(&state_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TwolistError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

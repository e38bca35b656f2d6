//! Configuration loading
//!
//! Reads `~/.config/kgcomplete/config.toml`. A missing file means defaults;
//! an unreadable or invalid file also means defaults, plus a warning the UI
//! shows in its status line.

use std::path::{Path, PathBuf};

use crate::error::KgError;

mod types;

pub use types::{
    AutocompleteConfig, Config, DEFAULT_BASE_URL, DEFAULT_FIELDS, FieldConfig, ResponseOrdering,
    ServerConfig,
};

const CONFIG_DIR: &str = "kgcomplete";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and any problem encountered loading it
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration from the default location
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };
    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    let result = std::fs::read_to_string(path)
        .map_err(KgError::from)
        .and_then(|content| parse_config(&content));

    match result {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config error, using defaults: {}", e)),
            }
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, KgError> {
    toml::from_str(content).map_err(|e| KgError::InvalidConfig(e.message().to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

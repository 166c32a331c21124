mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::catalog::CatalogChain;
use crate::error::StringsError;
use defaults::*;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub popups: PopupsConfig,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Translation catalog files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog files, most specific first. Empty = no translations installed.
    #[serde(default)]
    pub paths: Vec<String>,
}

impl CatalogConfig {
    /// Load the configured files as a layered catalog.
    pub fn build(&self) -> Result<CatalogChain, StringsError> {
        let paths: Vec<String> = self.paths.iter().map(|p| shellexpand(p)).collect();
        CatalogChain::load(&paths)
    }
}

/// Popup string settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupsConfig {
    /// Namespace prefix for translation keys.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Truncation bound in characters.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for PopupsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            max_length: default_max_length(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, StringsError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| StringsError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| StringsError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}

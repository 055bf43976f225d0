// src/config.rs - Plugin configuration
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PluginConfig {
    /// Whether the plugin emits status lines at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Whether suppressed notifications (SD card prints, ticks while idle)
    /// are logged at debug level.
    #[serde(default = "default_log_suppressed")]
    pub log_suppressed: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            log_suppressed: default_log_suppressed(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_log_suppressed() -> bool {
    true
}

/// Load the plugin configuration from a TOML file. A missing file is not an
/// error; the defaults apply.
pub fn load_config(config_path: &str) -> Result<PluginConfig, ConfigError> {
    let mut file = match File::open(config_path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No configuration at '{}', using defaults", config_path);
            return Ok(PluginConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let config = toml::from_str(&contents)?;
    tracing::info!("Loaded configuration from TOML file: {}", config_path);
    Ok(config)
}

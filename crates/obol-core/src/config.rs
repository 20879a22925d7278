//! Persisted app config (selected network, etc.) in the node data directory.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paths;

const CONFIG_FILENAME: &str = "config.toml";

/// Network the node joins when none is configured.
pub const DEFAULT_NETWORK: &str = "main";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Network the embedded node should join ("main", "test", "regtest").
    pub network: Option<String>,
}

impl Config {
    /// The network to run on, falling back to [DEFAULT_NETWORK].
    pub fn network(&self) -> &str {
        self.network
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_NETWORK)
    }
}

/// Load config from `data_dir`. Returns default config if missing or invalid.
pub fn load_config_in(data_dir: &Path) -> Config {
    let path = data_dir.join(CONFIG_FILENAME);
    let Ok(s) = std::fs::read_to_string(&path) else {
        return Config::default();
    };
    toml::from_str(&s).unwrap_or_default()
}

/// Load config from the provisioned data directory.
pub fn load_config() -> Config {
    let Some(data_dir) = paths::data_dir() else {
        return Config::default();
    };
    load_config_in(&data_dir)
}

/// Save config into `data_dir`.
pub fn save_config_in(data_dir: &Path, config: &Config) -> Result<(), ConfigError> {
    let path = data_dir.join(CONFIG_FILENAME);
    let s = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    std::fs::write(&path, s).map_err(ConfigError::Write)
}

/// Set and persist the network inside `data_dir`.
pub fn set_network_in(data_dir: &Path, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyNetwork);
    }
    let mut config = load_config_in(data_dir);
    config.network = Some(name.to_string());
    save_config_in(data_dir, &config)
}

/// Set and persist the network in the provisioned data directory.
pub fn set_network(name: &str) -> Result<(), ConfigError> {
    let data_dir = paths::data_dir().ok_or(ConfigError::NoDataDir)?;
    set_network_in(&data_dir, name)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the data directory")]
    NoDataDir,
    #[error("network name must not be empty")]
    EmptyNetwork,
    #[error("failed to serialize config: {0}")]
    Serialize(toml::ser::Error),
    #[error("failed to write config: {0}")]
    Write(std::io::Error),
}

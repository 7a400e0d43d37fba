//! Config management use case

use crate::error::{JotterError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and updating the persisted configuration
pub struct ConfigService {
    config_path: PathBuf,
}

impl ConfigService {
    /// Service over the config file at its resolved default location
    pub fn from_default_path() -> Self {
        ConfigService {
            config_path: Config::config_path(),
        }
    }

    /// Service over an explicit config file path
    pub fn at(config_path: PathBuf) -> Self {
        ConfigService { config_path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from(&self.config_path)?;

        match key {
            "vault" => Ok(config.vault_path.display().to_string()),
            "vault-name" => Ok(config.vault_name.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JotterError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: vault, vault-name, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from(&self.config_path)?;

        match key {
            "vault" => {
                config.vault_path = PathBuf::from(value);
            }
            "vault-name" => {
                config.vault_name = value.to_string();
            }
            "created" => {
                return Err(JotterError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JotterError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: vault, vault-name",
                    key
                )));
            }
        }

        config.save_to(&self.config_path)?;
        Ok(())
    }

    /// Load the full config for listing
    pub fn list(&self) -> Result<Config> {
        Config::load_from(&self.config_path)
    }
}

//! Configuration management

use crate::error::{JotterError, Result};
use crate::infrastructure::Vault;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub vault_path: PathBuf,
    pub vault_name: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config pointing at a vault
    pub fn new(vault_path: PathBuf, vault_name: String) -> Self {
        Config {
            vault_path,
            vault_name,
            created: Utc::now(),
        }
    }

    /// Where the config file lives: JOTTER_CONFIG wins, then the platform
    /// user config directory.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("JOTTER_CONFIG") {
            return PathBuf::from(path);
        }

        #[cfg(windows)]
        if let Ok(appdata) = env::var("APPDATA") {
            return PathBuf::from(appdata).join("jotter").join("config.toml");
        }

        #[cfg(not(windows))]
        {
            if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
                return PathBuf::from(xdg).join("jotter").join("config.toml");
            }
            if let Ok(home) = env::var("HOME") {
                return PathBuf::from(home)
                    .join(".config")
                    .join("jotter")
                    .join("config.toml");
            }
        }

        PathBuf::from("jotter-config.toml")
    }

    /// Load the persisted configuration.
    ///
    /// A missing file means the vault was never set up; an unparsable one
    /// is reported as corrupt rather than silently treated as missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JotterError::NotInitialized(path.to_path_buf())
            } else {
                JotterError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            JotterError::Config(format!("config file {} is corrupt: {}", path.display(), e))
        })
    }

    /// Save configuration to the resolved config path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Vault handle for this configuration
    pub fn vault(&self) -> Vault {
        Vault::new(self.vault_path.clone())
    }
}

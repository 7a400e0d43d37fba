//! Initialize vault use case

use crate::domain::{EntryType, Template};
use crate::error::{JotterError, Result};
use crate::infrastructure::{Config, Vault};
use std::fs;
use std::path::Path;

/// Set up a new vault at the given path and persist its configuration.
///
/// Creates the vault skeleton, distributes the packaged templates so users
/// can edit them in place, and writes the config file. Fails if the config
/// already points at a vault.
pub fn init(path: &Path, vault_name: Option<&str>) -> Result<()> {
    let config_path = Config::config_path();
    if config_path.exists() {
        return Err(JotterError::Config(format!(
            "Already initialized: configuration at {} points at an existing vault",
            config_path.display()
        )));
    }

    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    let root = fs::canonicalize(path)?;

    let name = match vault_name {
        Some(name) => name.to_string(),
        None => root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "vault".to_string()),
    };

    let vault = Vault::new(root.clone());
    vault.scaffold()?;

    for kind in EntryType::ALL {
        let template_path = vault.template_path(kind);
        if !template_path.exists() {
            fs::write(&template_path, Template::packaged(kind).source())?;
        }
    }

    let config = Config::new(root.clone(), name);
    config.save_to(&config_path)?;

    println!("Initialized jotter vault at {}", root.display());
    println!("Vault name: {}", config.vault_name);

    Ok(())
}

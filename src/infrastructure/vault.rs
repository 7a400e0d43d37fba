//! Vault file storage

use crate::domain::{EntryType, RelativePath};
use crate::error::{JotterError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Directories every vault starts with
const VAULT_DIRS: [&str; 5] = ["daily", "weekly", "monthly", "inbox", "templates"];

/// File storage rooted at the vault directory.
///
/// All operations take vault-relative paths; translation to host path
/// separators happens here and nowhere else.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: PathBuf) -> Self {
        Vault { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if an entry file exists
    pub fn entry_exists(&self, path: &RelativePath) -> bool {
        path.resolve_under(&self.root).is_file()
    }

    /// Read entry content
    pub fn read_entry(&self, path: &RelativePath) -> Result<String> {
        fs::read_to_string(path.resolve_under(&self.root)).map_err(JotterError::Io)
    }

    /// Write entry content, creating parent directories as needed
    pub fn write_entry(&self, path: &RelativePath, content: &str) -> Result<()> {
        let full = path.resolve_under(&self.root);

        if let Some(parent) = full.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&full, content).map_err(JotterError::Io)
    }

    /// Append to an entry, creating the file (and parents) on first use
    pub fn append_entry(&self, path: &RelativePath, content: &str) -> Result<()> {
        let full = path.resolve_under(&self.root);

        if let Some(parent) = full.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&full)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    /// Host path of the user-editable template for an entry type
    pub fn template_path(&self, kind: EntryType) -> PathBuf {
        self.root.join("templates").join(kind.template_key())
    }

    /// Create the vault skeleton directories
    pub fn scaffold(&self) -> Result<()> {
        for dir in VAULT_DIRS {
            fs::create_dir_all(self.root.join(dir))?;
        }
        Ok(())
    }
}

//! Error types for jotter

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the jotter application
#[derive(Debug, Error)]
pub enum JotterError {
    #[error("No jotter configuration found (looked at {0})")]
    NotInitialized(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown entry type: {0}")]
    UnknownEntryType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Opener error: {0}")]
    Opener(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JotterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JotterError::NotInitialized(_) => 2,
            JotterError::InvalidDate(_) => 3,
            JotterError::UnknownEntryType(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JotterError::NotInitialized(path) => {
                format!(
                    "No jotter configuration found (looked at {})\n\n\
                    Suggestions:\n\
                    • Run 'jotter init <path> --name <vault-name>' to set up a vault\n\
                    • Set JOTTER_CONFIG to point at an existing config file",
                    path.display()
                )
            }
            JotterError::InvalidDate(msg) => {
                format!(
                    "Invalid date: {}\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: jotter morning --date 2025-01-17",
                    msg
                )
            }
            JotterError::UnknownEntryType(tag) => {
                format!(
                    "Unknown entry type: '{}'\n\n\
                    Valid entry types:\n\
                    • morning, evening\n\
                    • weekly-start, weekly-end\n\
                    • monthly-start, monthly-end\n\n\
                    Examples:\n\
                    jotter morning\n\
                    jotter weekly-end --date 2025-01-17",
                    tag
                )
            }
            JotterError::Opener(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that a handler for obsidian:// links is installed\n\
                    • Use --no-open to create the entry without launching anything",
                    msg
                )
            }
            JotterError::Config(msg) => {
                if msg.contains("corrupt") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Fix the file by hand, or\n\
                        • Re-run 'jotter init' to write a fresh configuration",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JotterError
pub type Result<T> = std::result::Result<T, JotterError>;

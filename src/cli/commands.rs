//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(about = "Vault-based journaling CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Entry type (morning, evening, weekly-start, weekly-end, monthly-start, monthly-end)
    #[arg(value_name = "ENTRY_TYPE")]
    pub entry: Option<String>,

    /// Date to open (YYYY-MM-DD, default: today)
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Create the entry without launching the editor
    #[arg(long)]
    pub no_open: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up a new vault
    Init {
        /// Directory to hold the vault (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Vault name used in open URIs (default: directory name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Append a timestamped capture to today's inbox file
    Capture {
        /// Capture text
        #[arg(required = true, value_name = "MESSAGE")]
        message: Vec<String>,
    },

    /// Print the resolved path for an entry without touching the vault
    Path {
        /// Entry type
        #[arg(value_name = "ENTRY_TYPE")]
        entry: String,

        /// Date to resolve (YYYY-MM-DD, default: today)
        #[arg(short, long, value_name = "DATE")]
        date: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

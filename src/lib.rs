//! jotter - Vault-based journaling CLI
//!
//! A command-line journaling application that resolves entry types and dates
//! into deterministic vault paths, materializes entries from templates, and
//! opens them through the obsidian:// URI scheme.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JotterError;

//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod opener;
pub mod vault;

pub use config::Config;
pub use opener::UriOpener;
pub use vault::Vault;

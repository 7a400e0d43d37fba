//! Quick-capture use case

use crate::domain::date::format_hm;
use crate::domain::{capture_path, RelativePath};
use crate::error::Result;
use crate::infrastructure::Vault;
use chrono::NaiveDateTime;

/// Append a timestamped capture line to the day's inbox file.
///
/// The append unit is fixed: the bullet line and a blank separator line.
/// The inbox file is created on first capture.
pub fn capture(vault: &Vault, timestamp: NaiveDateTime, message: &str) -> Result<RelativePath> {
    let path = capture_path(timestamp.date());
    let line = format!("- {} - {}\n\n", format_hm(timestamp.time()), message);

    vault.append_entry(&path, &line)?;

    Ok(path)
}

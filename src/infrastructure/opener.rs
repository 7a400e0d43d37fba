//! Entry opening through the obsidian:// URI scheme

use crate::domain::RelativePath;
use crate::error::{JotterError, Result};
use std::process::Command;
use std::time::Duration;
use url::Url;
use wait_timeout::ChildExt;

/// How long to wait for the platform URI handler to exit
const OPEN_TIMEOUT: Duration = Duration::from_secs(3);

/// Opens vault entries in the external editor via its URI scheme
pub struct UriOpener {
    vault_name: String,
}

impl UriOpener {
    pub fn new(vault_name: String) -> Self {
        UriOpener { vault_name }
    }

    /// Build the obsidian://open URI for an entry
    pub fn entry_uri(&self, entry: &RelativePath) -> Result<Url> {
        Url::parse_with_params(
            "obsidian://open",
            &[
                ("vault", self.vault_name.as_str()),
                ("file", entry.as_str()),
            ],
        )
        .map_err(|e| JotterError::Opener(format!("Failed to build open URI: {}", e)))
    }

    /// Launch the platform URI handler for an entry.
    ///
    /// The wait for the handler is bounded: a handler that blocks past the
    /// bound is reported as a timeout, distinct from a missing launcher.
    /// Failures are reported, never retried.
    pub fn open(&self, entry: &RelativePath) -> Result<()> {
        let uri = self.entry_uri(entry)?;
        launch(uri.as_str())
    }
}

fn launcher_command(uri: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(uri);
        cmd
    }

    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(uri);
        cmd
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(uri);
        cmd
    }
}

fn launch(uri: &str) -> Result<()> {
    let mut command = launcher_command(uri);

    let mut child = command.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            JotterError::Opener(format!(
                "URI launcher '{}' not found",
                command.get_program().to_string_lossy()
            ))
        } else {
            JotterError::Opener(format!("Failed to launch URI handler: {}", e))
        }
    })?;

    match child.wait_timeout(OPEN_TIMEOUT)? {
        Some(status) if status.success() => Ok(()),
        Some(status) => Err(JotterError::Opener(format!(
            "URI handler exited with {}",
            status
        ))),
        // Still running; leave it alone, the launch itself may be fine
        None => Err(JotterError::Opener(format!(
            "URI handler did not finish within {} seconds",
            OPEN_TIMEOUT.as_secs()
        ))),
    }
}

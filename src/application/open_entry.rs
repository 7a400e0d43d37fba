//! Open entry use case

use crate::domain::candidates::first_matching;
use crate::domain::{load_template, EntryType, RelativePath, RenderWarning};
use crate::error::Result;
use crate::infrastructure::{Config, UriOpener, Vault};
use chrono::NaiveDate;

/// What happened while opening an entry
#[derive(Debug)]
pub struct OpenOutcome {
    pub path: RelativePath,
    pub created: bool,
    pub warnings: Vec<RenderWarning>,
}

/// Service for opening entries in the external editor
pub struct OpenEntryService {
    config: Config,
    vault: Vault,
}

impl OpenEntryService {
    pub fn new(config: Config) -> Self {
        let vault = config.vault();
        OpenEntryService { config, vault }
    }

    /// Resolve an entry, creating it from its template when missing, then
    /// launch the URI opener when `launch` is set.
    pub fn execute(&self, kind: EntryType, date: NaiveDate, launch: bool) -> Result<OpenOutcome> {
        let path = kind.entry_path(date);
        let mut warnings = Vec::new();

        let created = if self.vault.entry_exists(&path) {
            false
        } else {
            let template = load_template(self.vault.root(), kind)?;
            let rendered = template.render(date);
            self.vault.write_entry(&path, &rendered.text)?;
            warnings = rendered.warnings;
            true
        };

        if launch {
            UriOpener::new(self.config.vault_name.clone()).open(&path)?;
        }

        Ok(OpenOutcome {
            path,
            created,
            warnings,
        })
    }

    /// Open the day's entry with no explicit type: the evening entry if it
    /// exists, else the morning one, creating a fresh morning entry when
    /// the day has neither.
    pub fn execute_default(&self, date: NaiveDate, launch: bool) -> Result<OpenOutcome> {
        let kind = first_matching([EntryType::Evening, EntryType::Morning], |kind| {
            self.vault.entry_exists(&kind.entry_path(date))
        })
        .unwrap_or(EntryType::Morning);

        self.execute(kind, date, launch)
    }
}

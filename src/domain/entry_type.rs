//! Entry type definitions and entry path resolution

use crate::domain::date::format_ymd;
use crate::domain::path::RelativePath;
use crate::error::JotterError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// The closed set of journal entry types.
///
/// Each type selects both a path shape inside the vault and a template key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    Morning,
    Evening,
    WeeklyStart,
    WeeklyEnd,
    MonthlyStart,
    MonthlyEnd,
}

impl EntryType {
    pub const ALL: [EntryType; 6] = [
        EntryType::Morning,
        EntryType::Evening,
        EntryType::WeeklyStart,
        EntryType::WeeklyEnd,
        EntryType::MonthlyStart,
        EntryType::MonthlyEnd,
    ];

    /// The kebab-case tag this type is parsed from and displayed as
    pub fn tag(&self) -> &'static str {
        match self {
            EntryType::Morning => "morning",
            EntryType::Evening => "evening",
            EntryType::WeeklyStart => "weekly-start",
            EntryType::WeeklyEnd => "weekly-end",
            EntryType::MonthlyStart => "monthly-start",
            EntryType::MonthlyEnd => "monthly-end",
        }
    }

    /// Get the template file key for this type
    pub fn template_key(&self) -> &'static str {
        match self {
            EntryType::Morning => "morning.md",
            EntryType::Evening => "evening.md",
            EntryType::WeeklyStart => "weekly-start.md",
            EntryType::WeeklyEnd => "weekly-end.md",
            EntryType::MonthlyStart => "monthly-start.md",
            EntryType::MonthlyEnd => "monthly-end.md",
        }
    }

    /// Second segment of a two-part tag ("start"/"end").
    ///
    /// Derived from the tag text rather than matched per variant so any
    /// future two-part type gets a correct suffix without a new branch.
    fn period_suffix(&self) -> &'static str {
        match self.tag().split_once('-') {
            Some((_, suffix)) => suffix,
            None => "",
        }
    }

    /// Resolve this entry type and a date to its canonical vault path.
    ///
    /// Pure computation; never touches storage. Weekly paths use the ISO
    /// week-year for both the directory and the filename, so entries near
    /// a year boundary stay with their ISO week.
    pub fn entry_path(&self, date: NaiveDate) -> RelativePath {
        match self {
            EntryType::Morning | EntryType::Evening => RelativePath::from_segments([
                "daily".to_string(),
                format!("{:04}", date.year()),
                format!("{:02}", date.month()),
                format!("{}-{}.md", format_ymd(date), self.tag()),
            ]),
            EntryType::WeeklyStart | EntryType::WeeklyEnd => {
                let week = date.iso_week();
                RelativePath::from_segments([
                    "weekly".to_string(),
                    format!("{:04}", week.year()),
                    format!(
                        "{:04}-W{:02}-{}.md",
                        week.year(),
                        week.week(),
                        self.period_suffix()
                    ),
                ])
            }
            EntryType::MonthlyStart | EntryType::MonthlyEnd => RelativePath::from_segments([
                "monthly".to_string(),
                format!("{:04}", date.year()),
                format!(
                    "{:04}-{:02}-{}.md",
                    date.year(),
                    date.month(),
                    self.period_suffix()
                ),
            ]),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EntryType {
    type Err = JotterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        EntryType::ALL
            .into_iter()
            .find(|kind| kind.tag() == normalized)
            .ok_or_else(|| JotterError::UnknownEntryType(s.to_string()))
    }
}

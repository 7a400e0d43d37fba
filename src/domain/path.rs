//! Vault-relative paths

use crate::domain::date::format_ymd;
use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

/// A path relative to the vault root.
///
/// Always forward-slash separated and never absolute; adaptation to host
/// path separators happens only when joining onto a real root directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    /// Build a path from ordered segments (directories plus filename)
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let joined = segments.into_iter().collect::<Vec<_>>().join("/");
        RelativePath(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Adapt to the host filesystem by joining onto an absolute root
    pub fn resolve_under(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        for segment in self.segments() {
            path.push(segment);
        }
        path
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Path of the quick-capture inbox file for a given day
pub fn capture_path(date: NaiveDate) -> RelativePath {
    RelativePath::from_segments([
        "inbox".to_string(),
        format!("{}-captures.md", format_ymd(date)),
    ])
}

//! Template system for entry generation

use crate::domain::candidates::first_matching;
use crate::domain::date::format_ymd;
use crate::domain::entry_type::EntryType;
use crate::error::{JotterError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDate, NaiveTime};
use regex::{Captures, Regex};
use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

// Packaged default templates, one per entry type key
const MORNING_TEMPLATE: &str =
    "# {{date}} Morning ({{dayName}})\n\n## Intentions\n\n- \n\n## Gratitude\n\n- \n";
const EVENING_TEMPLATE: &str =
    "# {{date}} Evening\n\n## What happened\n\n- \n\n## Reflection\n\n";
const WEEKLY_START_TEMPLATE: &str = "# Week {{weekNumber}}, {{weekYear}}\n\n## Focus\n\n- \n";
const WEEKLY_END_TEMPLATE: &str =
    "# Week {{weekNumber}} Review\n\n## Wins\n\n- \n\n## Lessons\n\n- \n";
const MONTHLY_START_TEMPLATE: &str = "# {{monthName}} {{year}}\n\n## Goals\n\n- \n";
const MONTHLY_END_TEMPLATE: &str =
    "# {{monthName}} {{year}} Review\n\n## Highlights\n\n- \n\n## Carry forward\n\n- \n";

/// Matches `{{date:<fmt>}}` tokens; the format string is capture 1
fn date_token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{\{date:([^}]*)\}\}").unwrap())
}

/// Non-fatal diagnostic produced while rendering a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderWarning {
    pub placeholder: String,
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot format '{}'; placeholder left unchanged",
            self.placeholder
        )
    }
}

/// Result of rendering a template for a date
#[derive(Debug)]
pub struct Rendered {
    pub text: String,
    pub warnings: Vec<RenderWarning>,
}

/// Template for entry generation
#[derive(Debug)]
pub struct Template {
    content: String,
}

impl Template {
    /// Packaged default template for an entry type
    pub fn packaged(kind: EntryType) -> Self {
        let content = match kind {
            EntryType::Morning => MORNING_TEMPLATE,
            EntryType::Evening => EVENING_TEMPLATE,
            EntryType::WeeklyStart => WEEKLY_START_TEMPLATE,
            EntryType::WeeklyEnd => WEEKLY_END_TEMPLATE,
            EntryType::MonthlyStart => MONTHLY_START_TEMPLATE,
            EntryType::MonthlyEnd => MONTHLY_END_TEMPLATE,
        };

        Template {
            content: content.to_string(),
        }
    }

    /// Create template from a user-edited template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| JotterError::Template(format!("Failed to read template file: {}", e)))?;

        Ok(Template { content })
    }

    /// Raw template text
    pub fn source(&self) -> &str {
        &self.content
    }

    /// Render the template for a date.
    ///
    /// Three substitution passes run in fixed order, each a full
    /// replace-all over the current text: the bare `{{date}}` marker,
    /// then `{{date:<fmt>}}` tokens, then the named shortcuts. A
    /// `{{date:<fmt>}}` token whose format cannot be applied is left
    /// verbatim and reported as a warning; rendering never fails.
    pub fn render(&self, date: NaiveDate) -> Rendered {
        let mut warnings = Vec::new();

        let text = self.content.replace("{{date}}", &format_ymd(date));

        let text = date_token_regex()
            .replace_all(&text, |caps: &Captures| {
                match try_format_date(date, &caps[1]) {
                    Some(formatted) => formatted,
                    None => {
                        warnings.push(RenderWarning {
                            placeholder: caps[0].to_string(),
                        });
                        caps[0].to_string()
                    }
                }
            })
            .into_owned();

        let mut text = text;
        for (token, value) in shortcut_values(date) {
            text = text.replace(token, &value);
        }

        Rendered { text, warnings }
    }
}

/// Apply a strftime format to a date, or None if the format is unusable.
///
/// A format that fails to parse, uses specifiers a bare date cannot supply,
/// or contains no date specifiers at all counts as malformed; the last case
/// would otherwise echo junk like `not-a-real-format` into the entry as
/// literal text.
fn try_format_date(date: NaiveDate, fmt: &str) -> Option<String> {
    let items: Vec<Item> = StrftimeItems::new(fmt).collect();

    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    if !items
        .iter()
        .any(|item| matches!(item, Item::Numeric(..) | Item::Fixed(_)))
    {
        return None;
    }

    let mut out = String::new();
    write!(out, "{}", date.format_with_items(items.iter())).ok()?;
    Some(out)
}

/// Named shortcut tokens and their values for a date.
///
/// Time-bearing shortcuts format the date at midnight so rendering stays a
/// pure function of the calendar date.
fn shortcut_values(date: NaiveDate) -> [(&'static str, String); 12] {
    let midnight = date.and_time(NaiveTime::MIN);
    let week = date.iso_week();

    [
        (
            "{{time}}",
            format_or_empty(midnight.format("%Y-%m-%dT%H:%M:%S")),
        ),
        ("{{shortDate}}", format_or_empty(date.format("%x"))),
        ("{{fullDate}}", format_or_empty(date.format("%A, %B %d, %Y"))),
        ("{{dateTime}}", format_or_empty(midnight.format("%c"))),
        ("{{weekNumber}}", format!("{:02}", week.week())),
        ("{{weekYear}}", format!("{:04}", week.year())),
        ("{{dayName}}", format_or_empty(date.format("%A"))),
        ("{{monthName}}", format_or_empty(date.format("%B"))),
        ("{{monthShort}}", format_or_empty(date.format("%b"))),
        ("{{month}}", format_or_empty(date.format("%m"))),
        ("{{year}}", format_or_empty(date.format("%Y"))),
        ("{{yearShort}}", format_or_empty(date.format("%y"))),
    ]
}

/// Formatted value, or the empty string when the formatter cannot produce one
fn format_or_empty(formatted: impl fmt::Display) -> String {
    let mut out = String::new();
    if write!(out, "{}", formatted).is_err() {
        out.clear();
    }
    out
}

/// Load the template for an entry type: vault-local override first, then
/// the packaged default.
pub fn load_template(vault_root: &Path, kind: EntryType) -> Result<Template> {
    let override_path = vault_root.join("templates").join(kind.template_key());

    match first_matching([override_path], |path| path.is_file()) {
        Some(path) => Template::from_file(&path),
        None => Ok(Template::packaged(kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_packaged_templates_exist_for_all_types() {
        for kind in EntryType::ALL {
            let template = Template::packaged(kind);
            assert!(!template.source().is_empty());
        }
    }

    #[test]
    fn test_packaged_morning_uses_date_marker() {
        let template = Template::packaged(EntryType::Morning);
        assert!(template.source().contains("{{date}}"));
        assert!(template.source().contains("## Intentions"));
    }

    #[test]
    fn test_render_bare_date_marker() {
        let template = Template {
            content: "{{date}}".to_string(),
        };
        let rendered = template.render(date(2024, 1, 15));
        assert_eq!(rendered.text, "2024-01-15");
        assert!(rendered.warnings.is_empty());
    }

    #[test]
    fn test_render_idempotent_without_tokens() {
        let content = "# Plain note\n\nNothing { to } see {{ here.\n";
        let template = Template {
            content: content.to_string(),
        };
        let rendered = template.render(date(2024, 1, 15));
        assert_eq!(rendered.text, content);
        assert!(rendered.warnings.is_empty());
    }

    #[test]
    fn test_render_parametrized_date_format() {
        let template = Template {
            content: "{{date:%d/%m/%Y}}".to_string(),
        };
        let rendered = template.render(date(2024, 1, 15));
        assert_eq!(rendered.text, "15/01/2024");
        assert!(rendered.warnings.is_empty());
    }

    #[test]
    fn test_render_malformed_format_left_verbatim() {
        let template = Template {
            content: "{{date:not-a-real-format}}".to_string(),
        };
        let rendered = template.render(date(2024, 1, 15));
        assert_eq!(rendered.text, "{{date:not-a-real-format}}");
        assert_eq!(rendered.warnings.len(), 1);
        assert_eq!(
            rendered.warnings[0].placeholder,
            "{{date:not-a-real-format}}"
        );
    }

    #[test]
    fn test_render_time_specifier_on_date_is_malformed() {
        // A bare date has no time of day to format
        let template = Template {
            content: "{{date:%H:%M}}".to_string(),
        };
        let rendered = template.render(date(2024, 1, 15));
        assert_eq!(rendered.text, "{{date:%H:%M}}");
        assert_eq!(rendered.warnings.len(), 1);
    }

    #[test]
    fn test_render_mixed_valid_and_malformed_tokens() {
        let template = Template {
            content: "{{date:%Y}} and {{date:junk}} and {{date:%m}}".to_string(),
        };
        let rendered = template.render(date(2024, 1, 15));
        assert_eq!(rendered.text, "2024 and {{date:junk}} and 01");
        assert_eq!(rendered.warnings.len(), 1);
        assert_eq!(rendered.warnings[0].placeholder, "{{date:junk}}");
    }

    #[test]
    fn test_render_shortcut_battery() {
        let template = Template {
            content: "{{weekNumber}} {{monthName}} {{year}}".to_string(),
        };
        let rendered = template.render(date(2024, 1, 15));
        // January 15, 2024 is in ISO week 3
        assert_eq!(rendered.text, "03 January 2024");
    }

    #[test]
    fn test_render_all_shortcuts_pinned() {
        let template = Template {
            content: "{{time}}|{{shortDate}}|{{fullDate}}|{{dateTime}}|{{weekNumber}}|\
                      {{weekYear}}|{{dayName}}|{{monthName}}|{{monthShort}}|{{month}}|\
                      {{year}}|{{yearShort}}"
                .to_string(),
        };
        let rendered = template.render(date(2024, 1, 15));
        assert_eq!(
            rendered.text,
            "2024-01-15T00:00:00|01/15/24|Monday, January 15, 2024|\
             Mon Jan 15 00:00:00 2024|03|2024|Monday|January|Jan|01|2024|24"
        );
        assert!(rendered.warnings.is_empty());
    }

    #[test]
    fn test_render_week_shortcuts_at_year_boundary() {
        let template = Template {
            content: "{{weekYear}}-W{{weekNumber}}".to_string(),
        };
        // December 30, 2024 is in 2025-W01
        let rendered = template.render(date(2024, 12, 30));
        assert_eq!(rendered.text, "2025-W01");
    }

    #[test]
    fn test_render_preserves_unknown_tokens() {
        let template = Template {
            content: "{{date}} {{unknown}} {{dateish}}".to_string(),
        };
        let rendered = template.render(date(2024, 1, 15));
        assert_eq!(rendered.text, "2024-01-15 {{unknown}} {{dateish}}");
        assert!(rendered.warnings.is_empty());
    }

    #[test]
    fn test_render_bare_marker_does_not_eat_parametrized_one() {
        let template = Template {
            content: "{{date}} vs {{date:%Y}}".to_string(),
        };
        let rendered = template.render(date(2024, 1, 15));
        assert_eq!(rendered.text, "2024-01-15 vs 2024");
    }

    #[test]
    fn test_load_template_prefers_vault_override() {
        let temp = TempDir::new().unwrap();
        let templates_dir = temp.path().join("templates");
        fs::create_dir_all(&templates_dir).unwrap();
        fs::write(templates_dir.join("morning.md"), "# Custom {{date}}").unwrap();

        let template = load_template(temp.path(), EntryType::Morning).unwrap();
        assert_eq!(template.source(), "# Custom {{date}}");
    }

    #[test]
    fn test_load_template_falls_back_to_packaged() {
        let temp = TempDir::new().unwrap();

        let template = load_template(temp.path(), EntryType::Evening).unwrap();
        assert_eq!(template.source(), Template::packaged(EntryType::Evening).source());
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = Template::from_file(Path::new("/nonexistent/template.md"));
        assert!(result.is_err());
    }
}

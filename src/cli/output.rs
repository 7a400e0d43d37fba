//! Output formatting utilities

use crate::application::OpenOutcome;
use crate::domain::RenderWarning;

/// Format the confirmation line for an opened entry
pub fn format_open_outcome(outcome: &OpenOutcome) -> String {
    if outcome.created {
        format!("{} (new)", outcome.path)
    } else {
        outcome.path.to_string()
    }
}

/// Format a render warning for stderr
pub fn format_render_warning(warning: &RenderWarning) -> String {
    format!("warning: {}", warning)
}

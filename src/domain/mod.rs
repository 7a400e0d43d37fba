//! Domain layer - Business logic and domain models

pub mod candidates;
pub mod date;
pub mod entry_type;
pub mod path;
pub mod template;

pub use entry_type::EntryType;
pub use path::{capture_path, RelativePath};
pub use template::{load_template, Rendered, RenderWarning, Template};

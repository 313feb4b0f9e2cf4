mod content;
mod paths;
mod template;
mod types;

pub use content::rewrite_files;
pub use paths::rename_matching;
pub use template::{rename_template, STEP_COUNT};
pub use types::{ContentRewrite, RenameError, RenameOperation, RenameResult};

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod placeholder;
pub mod progress;
pub mod rename;
pub mod scanner;
pub mod validator;

pub use error::{AppError, ExitCode};
pub use placeholder::PLACEHOLDER;
pub use progress::Progress;
pub use rename::{rename_template, ContentRewrite, RenameError, RenameOperation, RenameResult};
pub use scanner::{EntryKind, ScannerError, CI_CONFIG_DIR};
pub use validator::{hyphenate, validate_name, NameError, ProjectName};

mod codes;

pub use codes::ExitCode;

use crate::rename::RenameError;
use crate::scanner::ScannerError;
use crate::validator::NameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Expected exactly one argument, got {count}")]
    Usage { count: usize },

    #[error("Invalid project name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Rename failed: {0}")]
    Filesystem(#[from] RenameError),

    #[error("Cannot determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("Failed to display output: {0}")]
    Output(#[source] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::Usage { .. } => ExitCode::InvalidArguments,
            AppError::InvalidName(_) => ExitCode::InvalidArguments,
            AppError::Filesystem(_) => ExitCode::FilesystemError,
            AppError::WorkingDirectory(_) => ExitCode::FilesystemError,
            AppError::Output(_) => ExitCode::FilesystemError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::Usage { count } => {
                format!(
                    "Expected exactly one argument, got {}.\n\n\
                     Usage: {} <NEW_NAME>\n\
                     Use underscores, not hyphens, in NEW_NAME (e.g. my_project).",
                    count,
                    env!("CARGO_PKG_NAME")
                )
            }

            AppError::InvalidName(err) => err.format_error_message(),

            AppError::Filesystem(err) => {
                let mut msg = match err {
                    RenameError::DestinationExists { from, to } => format!(
                        "Refusing to overwrite an existing entry:\n\
                         From: {}\n\
                         To:   {}",
                        from, to
                    ),
                    RenameError::Filesystem { from, to, source } => format!(
                        "Failed to rename:\n\
                         From: {}\n\
                         To:   {}\n\
                         Error: {}",
                        from, to, source
                    ),
                    RenameError::Rewrite { path, source } => format!(
                        "Failed to rewrite file contents:\n  {}\n\
                         Error: {}",
                        path.display(),
                        source
                    ),
                    RenameError::Scan(ScannerError::RootNotFound(path)) => format!(
                        "The working directory does not exist:\n  {}",
                        path.display()
                    ),
                    RenameError::Scan(ScannerError::NotADirectory(path)) => format!(
                        "The working path is not a directory:\n  {}",
                        path.display()
                    ),
                    RenameError::Scan(ScannerError::PermissionDenied(path)) => format!(
                        "Permission denied when accessing:\n  {}",
                        path.display()
                    ),
                    RenameError::Scan(other) => other.to_string(),
                };

                msg.push_str(
                    "\n\nThe tree may now be partially renamed. \
                     Check `git status` before running again.",
                );
                msg
            }

            AppError::WorkingDirectory(source) => {
                format!("Cannot determine the working directory: {}", source)
            }

            AppError::Output(source) => format!("Failed to display output: {}", source),
        }
    }
}

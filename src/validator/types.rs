use thiserror::Error;

/// A validated project name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    raw: String,
}

impl ProjectName {
    pub(super) fn new_unchecked(raw: String) -> Self {
        Self { raw }
    }

    /// Name as typed by the user, used for paths and identifiers
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Display form with every underscore turned into a hyphen
    pub fn hyphenated(&self) -> String {
        hyphenate(&self.raw)
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Map underscores to hyphens, leaving every other character alone
pub fn hyphenate(name: &str) -> String {
    name.replace('_', "-")
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NameError {
    #[error("Project name must not be empty")]
    Empty,

    #[error("Project name must not contain '-': {0}")]
    ContainsHyphen(String),

    #[error("Project name must not contain a path separator: {0}")]
    ContainsSeparator(String),
}

impl NameError {
    pub fn format_error_message(&self) -> String {
        match self {
            NameError::Empty => String::from("The project name must not be empty."),
            NameError::ContainsHyphen(name) => format!(
                "The project name '{}' contains '-'.\n\
                 Use underscores instead: '{}'.\n\
                 Hyphens are derived from underscores where a display name is needed.",
                name,
                name.replace('-', "_")
            ),
            NameError::ContainsSeparator(name) => format!(
                "The project name '{}' contains a path separator.\n\
                 The name becomes part of directory and file names, so it must be a single path segment.",
                name
            ),
        }
    }
}

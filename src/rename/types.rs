use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::placeholder::replace_first;
use crate::scanner::{EntryKind, ScannerError};

/// Errors that can occur while renaming the template
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Destination already exists: '{from}' -> '{to}'")]
    DestinationExists { from: String, to: String },

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Filesystem {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rewrite '{path}': {source}")]
    Rewrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Scan(#[from] ScannerError),
}

/// A single path rename
#[derive(Debug, Clone)]
pub struct RenameOperation {
    /// Whether a directory or a file is renamed
    pub kind: EntryKind,
    /// Full path to the source entry
    pub source_path: PathBuf,
    /// Original entry name
    pub source_name: String,
    /// Full path to the destination
    pub destination_path: PathBuf,
    /// New entry name
    pub destination_name: String,
}

impl RenameOperation {
    /// Plan the rename of `source_path`, replacing the first placeholder in its
    /// final segment.
    ///
    /// Returns `None` when the name has no placeholder, is not valid UTF-8, or
    /// would be renamed to itself.
    pub fn plan(source_path: PathBuf, kind: EntryKind, replacement: &str) -> Option<Self> {
        let source_name = source_path.file_name()?.to_str()?.to_string();
        let destination_name = replace_first(&source_name, replacement)?;
        if destination_name == source_name {
            return None;
        }

        let destination_path = source_path
            .parent()
            .map(|p| p.join(&destination_name))
            .unwrap_or_else(|| PathBuf::from(&destination_name));

        Some(Self {
            kind,
            source_path,
            source_name,
            destination_path,
            destination_name,
        })
    }
}

/// A file whose content had placeholder occurrences replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRewrite {
    pub path: PathBuf,
    pub replacement: String,
    pub occurrences: usize,
}

/// Everything a run changed, in the order it was changed
#[derive(Debug, Clone)]
pub struct RenameResult {
    /// Name the template was renamed to
    pub name: String,
    /// Hyphenated display form of the name
    pub hyphenated: String,
    pub operations: Vec<RenameOperation>,
    pub rewrites: Vec<ContentRewrite>,
}

impl RenameResult {
    pub fn new(name: &str, hyphenated: &str) -> Self {
        Self {
            name: name.to_string(),
            hyphenated: hyphenated.to_string(),
            operations: Vec::new(),
            rewrites: Vec::new(),
        }
    }

    pub fn add_operation(&mut self, op: RenameOperation) {
        self.operations.push(op);
    }

    pub fn add_rewrite(&mut self, rewrite: ContentRewrite) {
        self.rewrites.push(rewrite);
    }

    pub fn renamed_count(&self, kind: EntryKind) -> usize {
        self.operations.iter().filter(|op| op.kind == kind).count()
    }

    /// Number of distinct files whose content changed
    pub fn rewritten_files(&self) -> usize {
        self.rewrites
            .iter()
            .map(|r| r.path.as_path())
            .collect::<BTreeSet<&Path>>()
            .len()
    }

    pub fn total_replacements(&self) -> usize {
        self.rewrites.iter().map(|r| r.occurrences).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.rewrites.is_empty()
    }
}

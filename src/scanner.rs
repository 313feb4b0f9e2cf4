use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::placeholder::contains_placeholder;

/// Directory holding CI configuration, searched as an extra content root
pub const CI_CONFIG_DIR: &str = ".github";

/// Directories never descended into
const SKIPPED_DIRS: &[&str] = &[".git"];

/// Number of leading bytes inspected when sniffing for binary content
pub const SNIFF_SIZE: usize = 8192;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to walk directory tree: {0}")]
    Walk(#[source] walkdir::Error),
}

impl From<walkdir::Error> for ScannerError {
    fn from(err: walkdir::Error) -> Self {
        let denied = err
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied);

        match err.path() {
            Some(path) if denied => ScannerError::PermissionDenied(path.to_path_buf()),
            _ => ScannerError::Walk(err),
        }
    }
}

/// Kind of filesystem entry a rename applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    pub fn description(&self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        }
    }

    fn matches(&self, entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        match self {
            EntryKind::Directory => file_type.is_dir(),
            EntryKind::File => file_type.is_file(),
        }
    }
}

/// Ensure the tree root exists and is a directory
pub fn check_root(root: &Path) -> Result<(), ScannerError> {
    if !root.exists() {
        return Err(ScannerError::RootNotFound(root.to_path_buf()));
    }

    if !root.is_dir() {
        return Err(ScannerError::NotADirectory(root.to_path_buf()));
    }

    Ok(())
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && SKIPPED_DIRS
            .iter()
            .any(|skipped| entry.file_name() == *skipped)
}

fn walk(root: &Path) -> impl Iterator<Item = Result<DirEntry, walkdir::Error>> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if is_skipped(entry) {
                trace!(path = ?entry.path(), "Skipping directory");
                return false;
            }
            true
        })
}

/// Find every entry of `kind` below `root` whose name contains the placeholder.
///
/// Results are ordered deepest first, so renaming them in order never
/// invalidates a path still waiting to be renamed.
pub fn find_matching(root: &Path, kind: EntryKind) -> Result<Vec<PathBuf>, ScannerError> {
    debug!(path = ?root, kind = kind.description(), "Scanning for placeholder names");

    check_root(root)?;

    let mut matches = Vec::new();

    for entry in walk(root) {
        let entry = entry?;
        trace!(entry = ?entry.path(), "Examining entry");

        if !kind.matches(&entry) {
            continue;
        }

        if !contains_placeholder(&entry.file_name().to_string_lossy()) {
            continue;
        }

        debug!(path = ?entry.path(), "Found placeholder name");
        matches.push(entry.into_path());
    }

    matches.sort_by_key(|path| Reverse(path.components().count()));

    debug!(count = matches.len(), "Scan complete");

    Ok(matches)
}

/// Collect every regular file below the given roots.
///
/// Roots that do not exist are skipped. A file reachable from more than one
/// root is returned once.
pub fn collect_files(roots: &[PathBuf]) -> Result<Vec<PathBuf>, ScannerError> {
    let mut files = BTreeSet::new();

    for root in roots {
        if !root.is_dir() {
            debug!(path = ?root, "Content root not present, skipping");
            continue;
        }

        for entry in walk(root) {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.insert(entry.into_path());
            }
        }
    }

    debug!(count = files.len(), "Collected files");

    Ok(files.into_iter().collect())
}

/// Sniff the head of a file for NUL bytes.
///
/// Empty files count as text.
pub fn is_text_file(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    let mut sample = Vec::with_capacity(SNIFF_SIZE);
    file.by_ref().take(SNIFF_SIZE as u64).read_to_end(&mut sample)?;

    Ok(!sample.contains(&0))
}

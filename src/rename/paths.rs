use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::placeholder::PLACEHOLDER;
use crate::progress::Progress;
use crate::scanner::{find_matching, EntryKind};

use super::types::{RenameError, RenameOperation};

/// Rename every entry of `kind` below `root` whose name holds the placeholder.
///
/// Entries are renamed deepest first. A rename that would overwrite an
/// existing entry aborts the run. Names that are not valid UTF-8 are left
/// alone with a warning.
pub fn rename_matching(
    root: &Path,
    kind: EntryKind,
    replacement: &str,
    progress: &mut Progress,
) -> Result<Vec<RenameOperation>, RenameError> {
    let candidates = find_matching(root, kind)?;

    info!(
        "Renaming {} {} entries",
        candidates.len(),
        kind.description()
    );

    let mut operations = Vec::with_capacity(candidates.len());

    for path in candidates {
        if path.file_name().and_then(|n| n.to_str()).is_none() {
            warn!(path = ?path, "Skipping name that is not valid UTF-8");
            progress.warn(&format!(
                "{} is not valid UTF-8 and still mentions '{}', rename it by hand",
                display_relative(root, &path),
                PLACEHOLDER
            ));
            continue;
        }

        let Some(op) = RenameOperation::plan(path, kind, replacement) else {
            continue;
        };

        execute_rename(&op)?;

        progress.path_renamed(
            kind,
            &display_relative(root, &op.source_path),
            &display_relative(root, &op.destination_path),
        );

        operations.push(op);
    }

    Ok(operations)
}

fn execute_rename(op: &RenameOperation) -> Result<(), RenameError> {
    if op.destination_path.exists() {
        return Err(RenameError::DestinationExists {
            from: op.source_path.display().to_string(),
            to: op.destination_path.display().to_string(),
        });
    }

    debug!("Renaming: {} -> {}", op.source_name, op.destination_name);

    fs::rename(&op.source_path, &op.destination_path).map_err(|e| RenameError::Filesystem {
        from: op.source_path.display().to_string(),
        to: op.destination_path.display().to_string(),
        source: e,
    })
}

pub(super) fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

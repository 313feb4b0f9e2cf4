use std::path::Path;
use tracing::info;

use crate::placeholder::PLACEHOLDER;
use crate::progress::Progress;
use crate::scanner::{check_root, collect_files, EntryKind, CI_CONFIG_DIR};
use crate::validator::ProjectName;

use super::content::rewrite_files;
use super::paths::rename_matching;
use super::types::{RenameError, RenameResult};

/// Number of steps reported through [`Progress`]
pub const STEP_COUNT: usize = 4;

/// Rename the template below `root` to `name`.
///
/// Directories are renamed first, then files, then file contents: every
/// placeholder occurrence becomes `name`, and whatever placeholder text the
/// new name reintroduces becomes the hyphenated display name. The tree is
/// mutated in place and a failure leaves earlier steps applied.
pub fn rename_template(
    root: &Path,
    name: &ProjectName,
    progress: &mut Progress,
) -> Result<RenameResult, RenameError> {
    check_root(root)?;

    let hyphenated = name.hyphenated();
    let mut result = RenameResult::new(name.as_str(), &hyphenated);

    info!(root = ?root, name = %name, "Renaming template '{}'", PLACEHOLDER);

    progress.step_start(1, STEP_COUNT, "Renaming directories");
    for op in rename_matching(root, EntryKind::Directory, name.as_str(), progress)? {
        result.add_operation(op);
    }

    progress.step_start(2, STEP_COUNT, "Renaming files");
    for op in rename_matching(root, EntryKind::File, name.as_str(), progress)? {
        result.add_operation(op);
    }

    progress.step_start(3, STEP_COUNT, "Replacing the template name in file contents");
    let content_roots = [root.to_path_buf(), root.join(CI_CONFIG_DIR)];
    let files = collect_files(&content_roots)?;
    for rewrite in rewrite_files(&files, root, name.as_str(), progress)? {
        result.add_rewrite(rewrite);
    }

    progress.step_start(4, STEP_COUNT, "Writing the hyphenated display name");
    let files = collect_files(&[root.to_path_buf()])?;
    for rewrite in rewrite_files(&files, root, &hyphenated, progress)? {
        result.add_rewrite(rewrite);
    }

    info!(
        directories = result.renamed_count(EntryKind::Directory),
        files = result.renamed_count(EntryKind::File),
        rewritten = result.rewritten_files(),
        "Template renamed"
    );

    Ok(result)
}

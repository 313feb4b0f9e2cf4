use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::placeholder::{contains_placeholder, replace_all, PLACEHOLDER};
use crate::progress::Progress;
use crate::scanner::is_text_file;

use super::paths::display_relative;
use super::types::{ContentRewrite, RenameError};

enum FileOutcome {
    Unchanged,
    Rewritten(usize),
    /// Not valid UTF-8 but the placeholder shows up in a lossy decode
    UndecodableMatch,
}

/// Replace every placeholder occurrence in the given files.
///
/// Binary and non UTF-8 files are left untouched. Only files that actually
/// changed are returned.
pub fn rewrite_files(
    files: &[PathBuf],
    root: &Path,
    replacement: &str,
    progress: &mut Progress,
) -> Result<Vec<ContentRewrite>, RenameError> {
    let mut rewrites = Vec::new();

    for path in files {
        let occurrences = match rewrite_file(path, replacement)? {
            FileOutcome::Unchanged => continue,
            FileOutcome::Rewritten(occurrences) => occurrences,
            FileOutcome::UndecodableMatch => {
                warn!(path = ?path, "Placeholder left in file that is not valid UTF-8");
                progress.warn(&format!(
                    "{} is not valid UTF-8 and still mentions '{}', edit it by hand",
                    display_relative(root, path),
                    PLACEHOLDER
                ));
                continue;
            }
        };

        progress.file_rewritten(&display_relative(root, path), occurrences);

        rewrites.push(ContentRewrite {
            path: path.clone(),
            replacement: replacement.to_string(),
            occurrences,
        });
    }

    Ok(rewrites)
}

/// Rewrite a single file in place
fn rewrite_file(path: &Path, replacement: &str) -> Result<FileOutcome, RenameError> {
    let rewrite_error = |source| RenameError::Rewrite {
        path: path.to_path_buf(),
        source,
    };

    if !is_text_file(path).map_err(rewrite_error)? {
        trace!(path = ?path, "Skipping binary file");
        return Ok(FileOutcome::Unchanged);
    }

    let bytes = fs::read(path).map_err(rewrite_error)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = ?path, "Skipping file that is not valid UTF-8");
            if contains_placeholder(&String::from_utf8_lossy(e.as_bytes())) {
                return Ok(FileOutcome::UndecodableMatch);
            }
            return Ok(FileOutcome::Unchanged);
        }
    };

    let (rewritten, occurrences) = replace_all(&text, replacement);
    if occurrences == 0 || rewritten == text {
        return Ok(FileOutcome::Unchanged);
    }

    // Writing through the existing inode keeps its permissions
    fs::write(path, rewritten).map_err(rewrite_error)?;

    debug!(path = ?path, occurrences, "Rewrote file");

    Ok(FileOutcome::Rewritten(occurrences))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    struct SharedWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_rewrite_files_replaces_every_occurrence() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "uses rtla and rtla-cli").unwrap();

        let rewrites =
            rewrite_files(&[file.clone()], dir.path(), "my_proj", &mut Progress::silent())
                .unwrap();

        assert_eq!(rewrites.len(), 1);
        assert_eq!(rewrites[0].occurrences, 2);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "uses my_proj and my_proj-cli"
        );
    }

    #[test]
    fn test_rewrite_files_skips_untouched_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("README.md");
        fs::write(&file, "nothing to see").unwrap();

        let rewrites =
            rewrite_files(&[file], dir.path(), "my_proj", &mut Progress::silent()).unwrap();

        assert!(rewrites.is_empty());
    }

    #[test]
    fn test_rewrite_files_skips_binary_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("logo.png");
        let content = b"\x89PNG\x00rtla\x00".to_vec();
        fs::write(&file, &content).unwrap();

        let rewrites =
            rewrite_files(&[file.clone()], dir.path(), "my_proj", &mut Progress::silent())
                .unwrap();

        assert!(rewrites.is_empty());
        assert_eq!(fs::read(&file).unwrap(), content);
    }

    #[test]
    fn test_rewrite_files_skips_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("latin1.txt");
        let content = b"caf\xe9 rtla".to_vec();
        fs::write(&file, &content).unwrap();

        let buffer = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut progress = Progress::with_writer(Box::new(SharedWriter(buffer.clone())));

        let rewrites =
            rewrite_files(&[file.clone()], dir.path(), "my_proj", &mut progress).unwrap();

        assert!(rewrites.is_empty());
        assert_eq!(fs::read(&file).unwrap(), content);

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("latin1.txt is not valid UTF-8"));
    }

    #[test]
    fn test_rewrite_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("gone.txt");

        let result = rewrite_files(&[file], dir.path(), "my_proj", &mut Progress::silent());

        assert!(matches!(result, Err(RenameError::Rewrite { .. })));
    }
}

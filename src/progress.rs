//! Progress output for user-facing status updates.
//!
//! Step headers and one line per rename or rewrite go to stderr, leaving
//! stdout for the completion notice.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};

use crate::scanner::EntryKind;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        let colors_enabled = should_use_colors();
        if !colors_enabled {
            colored::control::set_override(false);
        }

        Self {
            writer: Box::new(io::stderr()),
            silent: false,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    /// Report the start of a step
    pub fn step_start(&mut self, current: usize, total: usize, description: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(self.writer, "{} {}", counter.cyan(), description.bold());
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {}", current, total, description);
        }
    }

    /// Report a renamed directory or file
    pub fn path_renamed(&mut self, kind: EntryKind, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "  {} {} {} {}",
                kind.description().dimmed(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(
                self.writer,
                "  {} {} -> {}",
                kind.description(),
                from,
                to
            );
        }
    }

    /// Report a file whose content was rewritten
    pub fn file_rewritten(&mut self, path: &str, occurrences: usize) {
        if self.silent {
            return;
        }
        let noun = if occurrences == 1 {
            "occurrence"
        } else {
            "occurrences"
        };
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "  {} {}",
                path,
                format!("({} {})", occurrences, noun).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "  {} ({} {})", path, occurrences, noun);
        }
    }

    /// Report a non-fatal problem
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_progress() -> (Progress, std::sync::Arc<std::sync::Mutex<Vec<u8>>>) {
        let buffer = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let writer = TestWriter(buffer.clone());
        let progress = Progress::with_writer(Box::new(writer));
        (progress, buffer)
    }

    struct TestWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_step_and_rename_output() {
        let (mut progress, buffer) = create_test_progress();

        progress.step_start(1, 4, "Renaming directories");
        progress.path_renamed(EntryKind::Directory, "rtla_core", "my_proj_core");

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("[1/4] Renaming directories"));
        assert!(output.contains("directory rtla_core -> my_proj_core"));
    }

    #[test]
    fn test_rewrite_output_pluralizes() {
        let (mut progress, buffer) = create_test_progress();

        progress.file_rewritten("setup.py", 1);
        progress.file_rewritten("README.md", 3);

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("setup.py (1 occurrence)"));
        assert!(output.contains("README.md (3 occurrences)"));
    }
}

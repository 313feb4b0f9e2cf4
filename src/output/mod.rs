use crate::rename::RenameResult;
use crate::scanner::EntryKind;
use std::io::{self, Write};

/// Display the summary of a run and the completion notice
pub fn display_completion(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;

    if result.is_empty() {
        writeln!(writer, "Nothing left to rename.")?;
    } else {
        writeln!(
            writer,
            "Renamed template to '{}' (display name '{}').",
            result.name, result.hyphenated
        )?;
        writeln!(
            writer,
            "  {} directories renamed",
            result.renamed_count(EntryKind::Directory)
        )?;
        writeln!(
            writer,
            "  {} files renamed",
            result.renamed_count(EntryKind::File)
        )?;
        writeln!(
            writer,
            "  {} files rewritten ({} replacements)",
            result.rewritten_files(),
            result.total_replacements()
        )?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "Done. Delete the {} tool and commit the changes.",
        env!("CARGO_PKG_NAME")
    )?;

    Ok(())
}

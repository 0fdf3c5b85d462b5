//! Directory traversal and per-file processing.
//!
//! The runner owns all file I/O and user-facing reporting; the table
//! alignment itself is the pure [`mdalign_tables::realign_document`] call.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use mdalign_tables::realign_document;

use crate::error::{AlignError, AlignResult};

/// Options threaded through a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlignOptions {
    /// Report files needing changes instead of rewriting them.
    pub check_only: bool,
}

/// Counters produced by a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Markdown files inspected.
    pub files_seen: usize,
    /// Files that needed (or received) realignment.
    pub files_changed: usize,
}

/// Whether a directory entry is a Markdown file by name.
///
/// The extension match is case-insensitive (`.md`, `.MD`, `.Md`).
fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_lowercase().ends_with(".md"))
}

/// Walk `root` and process every Markdown file under it.
///
/// Per-file read/write failures print a warning and are skipped; a failure
/// of the traversal itself aborts the run (files already rewritten stay
/// rewritten).
pub fn run(root: &Path, options: &AlignOptions) -> AlignResult<RunSummary> {
    if !root.is_dir() {
        return Err(AlignError::not_a_directory(root));
    }

    let mut summary = RunSummary::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_markdown_file(entry.path()) {
            continue;
        }

        summary.files_seen += 1;
        match process_file(entry.path(), options) {
            Ok(true) => summary.files_changed += 1,
            Ok(false) => {}
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "skipping file");
                eprintln!(
                    "Warning: failed to process {}: {}",
                    entry.path().display(),
                    err
                );
            }
        }
    }

    debug!(
        seen = summary.files_seen,
        changed = summary.files_changed,
        "run complete"
    );
    Ok(summary)
}

/// Process a single file: read, realign, and conditionally write.
///
/// Returns whether the file needed changes. In check mode nothing is
/// written; otherwise a changed file is rewritten in place in one write.
pub fn process_file(path: &Path, options: &AlignOptions) -> AlignResult<bool> {
    let content =
        fs::read_to_string(path).map_err(|e| AlignError::read(path, e))?;

    let outcome = realign_document(&content);
    if !outcome.changed {
        return Ok(false);
    }

    if options.check_only {
        println!("Needs alignment: {}", path.display());
    } else {
        fs::write(path, outcome.text).map_err(|e| AlignError::write(path, e))?;
        println!("Aligned: {}", path.display());
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_markdown_file() {
        assert!(is_markdown_file(Path::new("notes.md")));
        assert!(is_markdown_file(Path::new("NOTES.MD")));
        assert!(is_markdown_file(Path::new("dir/README.Md")));
        assert!(!is_markdown_file(Path::new("notes.txt")));
        assert!(!is_markdown_file(Path::new("md")));
        assert!(!is_markdown_file(Path::new("notes.md.bak")));
    }

    #[test]
    fn test_run_rewrites_misaligned_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("table.md");
        fs::write(&file, "| a | bb |\n|---|----|\n| c | ddddd |\n").unwrap();

        let summary = run(temp.path(), &AlignOptions::default()).unwrap();
        assert_eq!(summary.files_seen, 1);
        assert_eq!(summary.files_changed, 1);

        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content, "| a   | bb    |\n|-----|-------|\n| c   | ddddd |\n");
    }

    #[test]
    fn test_run_check_mode_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("table.md");
        let original = "| a | bb |\n|---|----|\n";
        fs::write(&file, original).unwrap();

        let options = AlignOptions { check_only: true };
        let summary = run(temp.path(), &options).unwrap();
        assert_eq!(summary.files_changed, 1);
        assert_eq!(fs::read_to_string(&file).unwrap(), original);
    }

    #[test]
    fn test_run_skips_non_markdown() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("table.txt"), "| a | bb |\n|---|---|\n").unwrap();

        let summary = run(temp.path(), &AlignOptions::default()).unwrap();
        assert_eq!(summary.files_seen, 0);
        assert_eq!(summary.files_changed, 0);
    }

    #[test]
    fn test_run_aligned_file_untouched() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("ok.md");
        let content = "no tables here\n";
        fs::write(&file, content).unwrap();

        let summary = run(temp.path(), &AlignOptions::default()).unwrap();
        assert_eq!(summary.files_seen, 1);
        assert_eq!(summary.files_changed, 0);
        assert_eq!(fs::read_to_string(&file).unwrap(), content);
    }

    #[test]
    fn test_run_recurses_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.md"), "| x | y |\n|---|---|\n").unwrap();

        let summary = run(temp.path(), &AlignOptions::default()).unwrap();
        assert_eq!(summary.files_seen, 1);
        assert_eq!(summary.files_changed, 1);
    }

    #[test]
    fn test_run_rejects_missing_root() {
        let err = run(Path::new("/definitely/not/here"), &AlignOptions::default()).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_run_rejects_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.md");
        fs::write(&file, "x\n").unwrap();

        let err = run(&file, &AlignOptions::default()).unwrap_err();
        assert!(matches!(err, AlignError::NotADirectory { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.md");
        fs::write(&good, "| a | bb |\n|---|---|\n").unwrap();

        let bad = temp.path().join("bad.md");
        fs::write(&bad, "| a | bb |\n|---|---|\n").unwrap();
        fs::set_permissions(&bad, fs::Permissions::from_mode(0o000)).unwrap();

        if fs::read_to_string(&bad).is_ok() {
            // Permission bits are not enforced for root; nothing to test.
            return;
        }

        let summary = run(temp.path(), &AlignOptions::default()).unwrap();
        assert_eq!(summary.files_seen, 2);
        assert_eq!(summary.files_changed, 1);

        fs::set_permissions(&bad, fs::Permissions::from_mode(0o644)).unwrap();
    }
}

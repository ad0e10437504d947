//! Handles the rewrite stage of the `blankstrip` pipeline.
//!
//! Each selected file goes through one read, clean, write cycle. Files are
//! handled strictly one after another, and a failure on one file is recorded
//! in the [`Report`] without stopping the walk.

use crate::config::Config;
use crate::core_types::{FileFailure, Report};
use crate::discovery::discover_files;
use crate::errors::Result;
use crate::progress::ProgressReporter;
use log::debug;
use std::path::{Path, PathBuf};

mod cleaner;
mod content_reader;
mod content_writer;

pub use cleaner::{classify_line, clean, trim_line, FenceState, LineKind};
use content_reader::read_file_content;
use content_writer::write_file_content;

/// Rewrites every selected file under `config.root` and returns the outcome.
///
/// The listing is collected before any file is touched so that the renames
/// done by atomic writes cannot disturb the directory iteration.
///
/// # Examples
///
/// ```
/// use blankstrip::config::ConfigBuilder;
/// use blankstrip::processing::process_directory;
/// use blankstrip::progress::NoOpProgress;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.md"), "# A\n\n\ntext\n").unwrap();
///
/// let config = ConfigBuilder::new()
///     .root(dir.path().to_str().unwrap())
///     .build()
///     .unwrap();
/// let report = process_directory(&config, &NoOpProgress);
///
/// assert_eq!(report.processed, 1);
/// assert_eq!(fs::read_to_string(dir.path().join("a.md")).unwrap(), "# A\ntext");
/// ```
pub fn process_directory(config: &Config, reporter: &dyn ProgressReporter) -> Report {
    let files: Vec<PathBuf> = discover_files(config).collect();
    debug!(
        "Discovered {} files under {}",
        files.len(),
        config.root.display()
    );

    let mut report = Report::default();
    for path in files {
        match rewrite_file(&path, config) {
            Ok(()) => {
                report.record_success();
                reporter.file_processed(&path);
            }
            Err(e) => {
                let failure = FileFailure {
                    path,
                    reason: e.cause_description(),
                };
                reporter.file_failed(&failure);
                report.record_failure(failure);
            }
        }
    }

    debug!(
        "Rewrite complete. Processed: {}, failed: {}",
        report.processed,
        report.failures.len()
    );
    report
}

/// Reads, cleans, and writes back a single file.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid UTF-8, or cannot
/// be written. On a read or decode error the file is left untouched.
pub fn rewrite_file(path: &Path, config: &Config) -> Result<()> {
    debug!("Processing file: {}", path.display());
    let content = read_file_content(path)?;
    let cleaned = clean(&content);
    write_file_content(path, &cleaned, config.write_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WriteMode;
    use crate::progress::NoOpProgress;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingProgress {
        processed: RefCell<Vec<PathBuf>>,
        failed: RefCell<Vec<PathBuf>>,
    }

    impl ProgressReporter for RecordingProgress {
        fn file_processed(&self, path: &Path) {
            self.processed.borrow_mut().push(path.to_path_buf());
        }
        fn file_failed(&self, failure: &FileFailure) {
            self.failed.borrow_mut().push(failure.path.clone());
        }
    }

    #[test]
    fn test_mixed_valid_and_invalid_files() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        fs::write(root.join("a.md"), "# A\n\n\nbody\n")?;
        fs::write(root.join("b.txt"), "one\n\ntwo\n")?;
        let invalid = [0x23, 0x20, 0xff, 0xfe, 0x0a, 0x0a];
        fs::write(root.join("c.md"), invalid)?;

        let config = Config::new_for_test(&root);
        let report = process_directory(&config, &NoOpProgress);

        assert_eq!(report.processed, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, root.join("c.md"));
        assert!(report.failures[0].reason.contains("not valid UTF-8"));
        assert!(!report.failures[0].reason.contains("c.md"));

        assert_eq!(fs::read_to_string(root.join("a.md"))?, "# A\nbody");
        assert_eq!(fs::read_to_string(root.join("b.txt"))?, "one\ntwo");
        assert_eq!(fs::read(root.join("c.md"))?, invalid);
        Ok(())
    }

    #[test]
    fn test_reporter_sees_every_selected_file_once() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        fs::create_dir_all(root.join("nested/deeper"))?;
        fs::write(root.join("one.md"), "x")?;
        fs::write(root.join("nested/two.txt"), "y")?;
        fs::write(root.join("nested/deeper/three.md"), [0x80])?;
        fs::write(root.join("nested/ignored.rs"), "z")?;

        let recorder = RecordingProgress::default();
        let report = process_directory(&Config::new_for_test(&root), &recorder);

        assert_eq!(report.total(), 3);
        assert_eq!(recorder.processed.borrow().len(), report.processed);
        assert_eq!(
            *recorder.failed.borrow(),
            vec![root.join("nested/deeper/three.md")]
        );
        Ok(())
    }

    #[test]
    fn test_non_selected_files_untouched() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        let rs_body = "fn main() {\n\n\n}\n";
        fs::write(root.join("main.rs"), rs_body)?;
        fs::write(root.join("README.MD"), "A\n\n\nB")?;
        let before = fs::metadata(root.join("main.rs"))?.modified()?;

        let report = process_directory(&Config::new_for_test(&root), &NoOpProgress);

        assert_eq!(report.total(), 0);
        assert_eq!(fs::read_to_string(root.join("main.rs"))?, rs_body);
        assert_eq!(fs::read_to_string(root.join("README.MD"))?, "A\n\n\nB");
        assert_eq!(fs::metadata(root.join("main.rs"))?.modified()?, before);
        Ok(())
    }

    #[test]
    fn test_in_place_mode_rewrites() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        fs::write(root.join("doc.md"), "```\n\n```\n\nend\n")?;

        let mut config = Config::new_for_test(&root);
        config.write_mode = WriteMode::InPlace;
        let report = process_directory(&config, &NoOpProgress);

        assert_eq!(report.processed, 1);
        assert_eq!(fs::read_to_string(root.join("doc.md"))?, "```\n\n```\nend");
        Ok(())
    }

    #[test]
    fn test_already_clean_file_is_byte_identical() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        let body = "# Heading\nParagraph one.\n- item";
        fs::write(root.join("clean.md"), body)?;

        process_directory(&Config::new_for_test(&root), &NoOpProgress);

        assert_eq!(fs::read(root.join("clean.md"))?, body.as_bytes());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_unwritable_file_recorded_and_walk_continues() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        let locked = root.join("locked.md");
        fs::write(&locked, "a\n\nb")?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;
        fs::write(root.join("open.md"), "c\n\nd")?;

        // Root ignores permission bits, so the read may succeed there.
        let readable_anyway = fs::read(&locked).is_ok();

        let report = process_directory(&Config::new_for_test(&root), &NoOpProgress);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644))?;

        assert_eq!(report.total(), 2);
        assert_eq!(fs::read_to_string(root.join("open.md"))?, "c\nd");
        if !readable_anyway {
            assert_eq!(report.processed, 1);
            assert_eq!(report.failures[0].path, locked);
            assert_eq!(fs::read_to_string(&locked)?, "a\n\nb");
        }
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_recorded_as_failure() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        fs::write(root.join("ok.md"), "a\n\nb")?;
        let dead = root.join("dead.md");
        std::os::unix::fs::symlink(root.join("missing.txt"), &dead)?;

        let recorder = RecordingProgress::default();
        let report = process_directory(&Config::new_for_test(&root), &recorder);

        assert_eq!(report.processed, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, dead);
        assert_eq!(*recorder.failed.borrow(), vec![dead.clone()]);
        assert!(fs::symlink_metadata(&dead)?.file_type().is_symlink());
        assert!(!root.join("missing.txt").exists());
        Ok(())
    }

    #[test]
    fn test_failure_reason_does_not_repeat_path() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        fs::write(root.join("broken.md"), [0xff, 0x0a])?;

        let report = process_directory(&Config::new_for_test(&root), &NoOpProgress);

        assert_eq!(report.failures.len(), 1);
        let reason = &report.failures[0].reason;
        assert!(reason.starts_with("not valid UTF-8"));
        assert!(!reason.contains("broken.md"));
        Ok(())
    }
}

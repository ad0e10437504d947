// src/progress.rs

//! Defines a trait for reporting per-file outcomes while a tree is rewritten.

use crate::constants::FAILURE_LINE_PREFIX;
use crate::core_types::FileFailure;
use std::path::Path;

/// Receives per-file outcomes as they happen during a run.
///
/// The walker calls exactly one of these methods for every selected file.
///
/// # Examples
///
/// ```
/// use blankstrip::core_types::FileFailure;
/// use blankstrip::progress::ProgressReporter;
/// use std::path::Path;
/// use std::sync::Mutex;
///
/// // A mock reporter that counts events.
/// struct Tally {
///     ok: Mutex<usize>,
///     failed: Mutex<usize>,
/// }
/// impl ProgressReporter for Tally {
///     fn file_processed(&self, _path: &Path) {
///         *self.ok.lock().unwrap() += 1;
///     }
///     fn file_failed(&self, _failure: &FileFailure) {
///         *self.failed.lock().unwrap() += 1;
///     }
/// }
///
/// let tally = Tally { ok: Mutex::new(0), failed: Mutex::new(0) };
/// tally.file_processed(Path::new("a.md"));
/// assert_eq!(*tally.ok.lock().unwrap(), 1);
/// ```
pub trait ProgressReporter {
    /// Called after a file was cleaned and written back.
    fn file_processed(&self, path: &Path);
    /// Called as soon as a file fails, before the walk moves on.
    fn file_failed(&self, failure: &FileFailure);
}

/// A `ProgressReporter` that does nothing.
///
/// Used by library callers that only care about the final report.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn file_processed(&self, _path: &Path) {}
    fn file_failed(&self, _failure: &FileFailure) {}
}

/// Prints each failure to stderr the moment it happens.
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn file_processed(&self, path: &Path) {
        log::debug!("Rewrote {}", path.display());
    }

    fn file_failed(&self, failure: &FileFailure) {
        eprintln!("{}", format_failure_line(failure));
    }
}

/// Formats the line printed when a file fails.
pub fn format_failure_line(failure: &FileFailure) -> String {
    format!(
        "{} {}: {}",
        FAILURE_LINE_PREFIX,
        failure.path.display(),
        failure.reason
    )
}

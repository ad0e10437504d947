//! Defines the data structures produced by a traversal.
//!
//! `Report` and `FileFailure` are built up while the tree is walked and are
//! consumed once at the end to print the summary.

use std::path::PathBuf;

/// A file that matched the extension filter but could not be rewritten.
///
/// # Examples
///
/// ```
/// use blankstrip::core_types::FileFailure;
/// use std::path::PathBuf;
///
/// let failure = FileFailure {
///     path: PathBuf::from("docs/broken.md"),
///     reason: "File 'docs/broken.md' is not valid UTF-8".to_string(),
/// };
/// assert!(failure.reason.contains("UTF-8"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Path of the file as yielded by the walk.
    pub path: PathBuf,
    /// Human-readable description of what went wrong.
    pub reason: String,
}

/// Outcome of rewriting a directory tree.
///
/// Every file selected by the extension filter lands in exactly one bucket:
/// it is either counted in `processed` or listed in `failures`.
///
/// # Examples
///
/// ```
/// use blankstrip::core_types::Report;
///
/// let report = Report::default();
/// assert_eq!(report.processed, 0);
/// assert!(!report.has_failures());
/// assert_eq!(report.total(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of files cleaned and written back successfully.
    pub processed: usize,
    /// Files that failed, in the order they were encountered.
    pub failures: Vec<FileFailure>,
}

impl Report {
    /// Records a successfully rewritten file.
    pub fn record_success(&mut self) {
        self.processed += 1;
    }

    /// Records a failed file.
    pub fn record_failure(&mut self, failure: FileFailure) {
        self.failures.push(failure);
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Total number of files that matched the extension filter.
    pub fn total(&self) -> usize {
        self.processed + self.failures.len()
    }
}

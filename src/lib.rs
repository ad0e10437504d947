//! `blankstrip` is a library and command-line tool that removes blank lines
//! from Markdown and plain-text files across a directory tree, while keeping
//! fenced code blocks exactly as they are (apart from per-line trimming).
//!
//! As a library, it offers two layers:
//! 1.  **Clean**: [`clean`] is a pure function over a string, usable without
//!     touching the file system.
//! 2.  **Rewrite**: [`process`] (or [`processing::process_directory`] for full
//!     control) walks a directory and rewrites every `.md` and `.txt` file in
//!     place, returning a [`Report`] of what succeeded and what failed.
//!
//! # Example: Library Usage
//!
//! ```
//! use blankstrip::{clean, process};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! assert_eq!(clean("a\n\n\nb\n"), "a\nb");
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("notes.md"), "# Notes\n\n\n- one\n").unwrap();
//! fs::write(temp_dir.path().join("bad.txt"), [0xffu8, 0xfe]).unwrap();
//!
//! let report = process(temp_dir.path().to_str().unwrap()).unwrap();
//!
//! assert_eq!(report.processed, 1);
//! assert_eq!(report.failures.len(), 1);
//! assert_eq!(
//!     fs::read_to_string(temp_dir.path().join("notes.md")).unwrap(),
//!     "# Notes\n- one"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod processing;
pub mod progress;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, WriteMode};
pub use core_types::{FileFailure, Report};
pub use processing::clean;

use crate::progress::{NoOpProgress, ProgressReporter};
use std::io::Write;

/// Rewrites every `.md` and `.txt` file under `root` with default settings.
///
/// Per-file failures do not make this function fail; they are listed in the
/// returned [`Report`].
///
/// # Errors
/// Returns an error only if `root` cannot be resolved to an existing directory.
pub fn process(root: &str) -> anyhow::Result<Report> {
    let config = ConfigBuilder::new().root(root).build()?;
    Ok(processing::process_directory(&config, &NoOpProgress))
}

/// Executes a complete run: rewrite the tree, then write the summary.
///
/// This mirrors the command-line execution. Failures are passed to `reporter`
/// as they happen and listed again in the summary written to `writer`.
///
/// # Errors
/// Returns an error only if writing the summary fails.
pub fn run(
    config: &Config,
    reporter: &dyn ProgressReporter,
    writer: &mut dyn Write,
) -> std::io::Result<Report> {
    log::info!("Cleaning files under {}", config.root.display());
    let report = processing::process_directory(config, reporter);
    output::write_summary(writer, &report)?;
    Ok(report)
}

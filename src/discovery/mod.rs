//! Discovers the files selected for rewriting.
use crate::config::Config;
use crate::filtering::has_selected_extension;
use ignore::DirEntry;
use log::debug;
use std::path::PathBuf;

mod walker;

use walker::build_walker;

/// Lazily yields every selected file under `config.root`.
///
/// Files are yielded in the order the file-system listing provides; the
/// order is not sorted. A file is selected when it is a regular file or a
/// symlink not pointing at a directory (dangling links included), and its
/// name ends with one of `config.extensions`.
///
/// Entries that cannot be read while walking (for example a subdirectory
/// without read permission) are logged as warnings and skipped. They are not
/// selected files, so they never appear in a [`Report`](crate::Report).
///
/// # Examples
///
/// ```
/// use blankstrip::config::ConfigBuilder;
/// use blankstrip::discovery::discover_files;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("guide.md"), "# Guide").unwrap();
/// fs::write(dir.path().join("build.rs"), "fn main() {}").unwrap();
///
/// let config = ConfigBuilder::new()
///     .root(dir.path().to_str().unwrap())
///     .build()
///     .unwrap();
///
/// let files: Vec<_> = discover_files(&config).collect();
/// assert_eq!(files.len(), 1);
/// assert!(files[0].ends_with("guide.md"));
/// ```
pub fn discover_files(config: &Config) -> impl Iterator<Item = PathBuf> + '_ {
    build_walker(&config.root).filter_map(move |entry_result| match entry_result {
        Ok(entry) => {
            if is_file_entry(&entry) && has_selected_extension(entry.path(), &config.extensions) {
                debug!("Selected file: {}", entry.path().display());
                Some(entry.into_path())
            } else {
                None
            }
        }
        Err(e) => {
            log::warn!("Skipping unreadable entry during walk: {}", e);
            None
        }
    })
}

fn is_file_entry(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        // Directory links are not followed. Any other link is a file to
        // rewrite, and a dangling one fails on read like any unreadable file.
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}

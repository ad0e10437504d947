//! Defines the core `Config` struct and related types for application configuration.
//!
//! The CLI only supplies the root directory; everything else has a fixed
//! default that library callers may override through `ConfigBuilder`.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
pub mod path_resolve;

/// How cleaned content is written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write to a temporary sibling file and rename it over the original.
    /// A crash mid-write leaves the original untouched.
    #[default]
    Atomic,
    /// Truncate and overwrite the original file directly.
    InPlace,
}

/// Settings for a single run, validated and ready for the walker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute, canonicalized root directory to walk.
    pub root: PathBuf,
    /// File name suffixes to select (case-sensitive), e.g. `.md`.
    pub extensions: Vec<String>,
    /// Strategy used to write cleaned files.
    pub write_mode: WriteMode,
}

impl Config {
    /// Creates a `Config` rooted at `root` without resolving or validating it.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests only.
    #[doc(hidden)]
    pub fn new_for_test(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: crate::constants::DEFAULT_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            write_mode: WriteMode::default(),
        }
    }
}

//! Defines application-specific error types.
//!
//! This module provides the `AppError` enum, which categorizes the errors that
//! can occur while rewriting a tree, offering more context than generic I/O or
//! `anyhow` errors.

use std::path::Path;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Application-specific errors used throughout `blankstrip`.
#[derive(Error, Debug)]
pub enum AppError {
    // --- I/O Errors ---
    /// Error occurring during file access (read, write, rename, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    IoError {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its bytes are not valid UTF-8.
    #[error("File '{path}' is not valid UTF-8: {source}")]
    DecodeError {
        /// The path of the file that failed to decode.
        path: String,
        #[source]
        source: FromUtf8Error,
    },

    // --- Configuration Errors ---
    /// Invalid configuration, such as a root that is not a directory.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Describes the failure without the path, for output that already
    /// prints the path next to it.
    pub fn cause_description(&self) -> String {
        match self {
            AppError::IoError { source, .. } => source.to_string(),
            AppError::DecodeError { source, .. } => format!("not valid UTF-8: {}", source),
            AppError::ConfigError(msg) => msg.clone(),
        }
    }
}

/// Result alias used by the library.
pub type Result<T> = std::result::Result<T, AppError>;

/// Helper function to create an `AppError::IoError` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::IoError {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `AppError::DecodeError` with path context.
pub fn decode_error_with_path<P: AsRef<Path>>(source: FromUtf8Error, path: P) -> AppError {
    AppError::DecodeError {
        path: path.as_ref().display().to_string(),
        source,
    }
}

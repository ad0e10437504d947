// src/config/path_resolve.rs

use crate::errors::AppError;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolves the root path string to an absolute, canonicalized directory.
///
/// # Errors
/// Fails if the path does not exist or cannot be canonicalized, or if it
/// resolves to something other than a directory.
pub fn resolve_root_dir(input_path_str: &str) -> Result<PathBuf> {
    let input_path = PathBuf::from(input_path_str);
    let resolved = input_path
        .canonicalize()
        .with_context(|| format!("Failed to resolve input path: '{}'", input_path_str))?;
    if !resolved.is_dir() {
        return Err(AppError::ConfigError(format!(
            "'{}' is not a directory",
            input_path_str
        ))
        .into());
    }
    Ok(resolved)
}

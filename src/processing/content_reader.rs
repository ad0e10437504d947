// src/processing/content_reader.rs

use crate::errors::{decode_error_with_path, io_error_with_path, Result};
use std::{fs, path::Path};

/// Reads the entire content of a file and decodes it as UTF-8.
///
/// Invalid UTF-8 is an error rather than being replaced lossily, so a
/// misnamed binary file is reported instead of being rewritten.
pub(super) fn read_file_content(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    String::from_utf8(bytes).map_err(|e| decode_error_with_path(e, path))
}

// src/processing/content_writer.rs

use crate::config::WriteMode;
use crate::constants::TEMP_FILE_PREFIX;
use crate::errors::{io_error_with_path, Result};
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder as TempFileBuilder;

/// Replaces the content of `path` with `content`, using the given strategy.
pub(super) fn write_file_content(path: &Path, content: &str, mode: WriteMode) -> Result<()> {
    match mode {
        WriteMode::Atomic => write_atomic(path, content),
        WriteMode::InPlace => fs::write(path, content).map_err(|e| io_error_with_path(e, path)),
    }
}

/// Writes to a temporary file next to the target and renames it over the
/// target. The original permissions are carried over to the new file.
///
/// When the directory does not allow creating the temp file, the target is
/// truncated and written in place instead.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = resolve_write_target(path)?;
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let permissions = fs::metadata(&target)
        .map_err(|e| io_error_with_path(e, &target))?
        .permissions();

    // No suffix: the temp name must never look like a selected file.
    let mut temp = match TempFileBuilder::new()
        .prefix(TEMP_FILE_PREFIX)
        .tempfile_in(dir)
    {
        Ok(temp) => temp,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            log::warn!(
                "Cannot create a temp file in {}, rewriting {} in place",
                dir.display(),
                target.display()
            );
            return fs::write(&target, content).map_err(|e| io_error_with_path(e, &target));
        }
        Err(e) => return Err(io_error_with_path(e, &target)),
    };

    temp.write_all(content.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .and_then(|_| temp.as_file().set_permissions(permissions))
        .map_err(|e| io_error_with_path(e, &target))?;

    temp.persist(&*target)
        .map_err(|e| io_error_with_path(e.error, &target))?;
    log::debug!("Atomically replaced {}", target.display());
    Ok(())
}

/// Returns the file a write should land on. A symlink resolves to its target
/// so that the rename replaces the real file and leaves the link in place.
fn resolve_write_target(path: &Path) -> Result<Cow<'_, Path>> {
    let link_meta = fs::symlink_metadata(path).map_err(|e| io_error_with_path(e, path))?;
    if link_meta.file_type().is_symlink() {
        let resolved = fs::canonicalize(path).map_err(|e| io_error_with_path(e, path))?;
        Ok(Cow::Owned(resolved))
    } else {
        Ok(Cow::Borrowed(path))
    }
}

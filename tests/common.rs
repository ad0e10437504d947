// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Not every integration test drives the binary.
pub fn blankstrip_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("blankstrip"))
}

/// Writes `content` to `relative_path` under `dir`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(
    dir_path: &Path,
    relative_path: &str,
    content: impl AsRef<[u8]>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir_path.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}

// src/filtering/extension.rs

use std::path::Path;

/// Checks whether a path's file name ends with one of `extensions`.
///
/// The match is a plain, case-sensitive suffix comparison on the file name,
/// so `notes.MD` is not selected and a file named exactly `.md` is.
///
/// # Examples
///
/// ```
/// use blankstrip::filtering::has_selected_extension;
/// use std::path::Path;
///
/// let exts = vec![".md".to_string(), ".txt".to_string()];
/// assert!(has_selected_extension(Path::new("docs/guide.md"), &exts));
/// assert!(has_selected_extension(Path::new("notes.txt"), &exts));
/// assert!(!has_selected_extension(Path::new("README.MD"), &exts));
/// assert!(!has_selected_extension(Path::new("src/main.rs"), &exts));
/// ```
pub fn has_selected_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(file_name) = path.file_name() else {
        return false;
    };
    let file_name = file_name.to_string_lossy();
    extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
}

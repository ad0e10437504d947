// src/constants.rs

/// Marker that opens and closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// File name suffixes selected for rewriting (case-sensitive).
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".md", ".txt"];

/// Prefix for the per-file failure line printed as failures occur.
pub const FAILURE_LINE_PREFIX: &str = "Error processing file";

/// Header printed before the list of failed files in the summary.
pub const FAILURES_HEADER: &str = "The following files could not be processed:";

/// Prefix for the temporary sibling file used by atomic rewrites.
pub const TEMP_FILE_PREFIX: &str = ".blankstrip-";

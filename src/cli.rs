// src/cli.rs

use clap::Parser;

/// Removes blank lines from Markdown and text files, recursively.
///
/// blankstrip walks a directory tree and rewrites every `.md` and `.txt` file
/// in place, deleting blank lines and trimming surrounding whitespace from
/// each line. Lines inside fenced code blocks (```) are kept, blank or not.
/// A file that cannot be read, decoded, or written is reported and skipped;
/// the rest of the tree is still processed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The directory to process recursively.
    pub directory: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positional_directory() {
        let cli = Cli::try_parse_from(["blankstrip", "docs"]).unwrap();
        assert_eq!(cli.directory, "docs");
    }

    #[test]
    fn test_missing_directory_is_usage_error() {
        let err = Cli::try_parse_from(["blankstrip"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["blankstrip", "--dry-run", "docs"]).is_err());
    }
}

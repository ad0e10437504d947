use super::{path_resolve::resolve_root_dir, Config, WriteMode};
use crate::cli::Cli;
use crate::constants::DEFAULT_EXTENSIONS;
use anyhow::Result;

/// Builds a validated [`Config`].
///
/// # Examples
///
/// ```
/// use blankstrip::config::{ConfigBuilder, WriteMode};
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let config = ConfigBuilder::new()
///     .root(dir.path().to_str().unwrap())
///     .write_mode(WriteMode::InPlace)
///     .build()
///     .unwrap();
///
/// assert!(config.root.is_absolute());
/// assert_eq!(config.extensions, vec![".md".to_string(), ".txt".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    root: Option<String>,
    extensions: Option<Vec<String>>,
    write_mode: Option<WriteMode>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self::new().root(cli.directory)
    }

    /// Sets the directory to walk.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Overrides the selected file name suffixes (default `.md` and `.txt`).
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = Some(mode);
        self
    }

    /// Validates the settings and resolves the root directory.
    ///
    /// # Errors
    /// Fails if no root was given, if the root cannot be resolved to an
    /// existing directory, or if the extension list is empty.
    pub fn build(self) -> Result<Config> {
        let root_str = self
            .root
            .ok_or_else(|| anyhow::anyhow!("Invalid configuration: no root directory given"))?;
        let root = resolve_root_dir(&root_str)?;

        let extensions = self
            .extensions
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect());
        if extensions.is_empty() || extensions.iter().any(|e| e.is_empty()) {
            anyhow::bail!("Invalid configuration: extension list must not contain empty entries");
        }

        let config = Config {
            root,
            extensions,
            write_mode: self.write_mode.unwrap_or_default(),
        };
        log::debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}

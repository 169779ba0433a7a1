// RUST LEARNING: The configuration is an explicit value passed into each step
// - Nothing reads parsed arguments from global state
// - Like passing an options object instead of reading `process.argv` everywhere
use crate::error::{DocverError, DocverResult};
use std::path::PathBuf;

/// Everything one registration run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterConfig {
    /// Manifest to read and rewrite
    pub version_file: PathBuf,
    /// Folder recorded for the new entry
    pub folder: String,
    /// Version identifier to register
    pub version: String,
    /// Print the result instead of writing it
    pub dry_run: bool,
}

impl RegisterConfig {
    pub fn new(
        version_file: impl Into<PathBuf>,
        folder: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            version_file: version_file.into(),
            folder: folder.into(),
            version: version.into(),
            dry_run: false,
        }
    }

    /// Builds the config from optional argument values, failing on the first
    /// one that is missing.
    pub fn from_parts(
        version_file: Option<PathBuf>,
        folder: Option<String>,
        version: Option<String>,
        dry_run: bool,
    ) -> DocverResult<Self> {
        // RUST LEARNING: `ok_or` turns `Option<T>` into `Result<T, E>`
        // - Then `?` returns early with the error, like an early `throw`
        let version_file = version_file.ok_or(DocverError::MissingArgument("version_file"))?;
        let folder = folder.ok_or(DocverError::MissingArgument("folder"))?;
        let version = version.ok_or(DocverError::MissingArgument("version"))?;

        Ok(Self {
            version_file,
            folder,
            version,
            dry_run,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

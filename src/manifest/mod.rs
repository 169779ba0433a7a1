pub mod format;
pub mod sort;
pub mod store;
pub mod types;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Version not found in manifest: {0}")]
    VersionNotFound(String),
}

pub type Result<T> = std::result::Result<T, ManifestError>;

pub use sort::SortKey;
pub use store::{parse_manifest, render_manifest, ManifestFile, MANIFEST_PREFIX};
pub use types::{Manifest, VersionEntry};

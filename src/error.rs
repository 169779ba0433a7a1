use crate::manifest::ManifestError;
use thiserror::Error;

/// Top-level error for docver commands, separating user interruptions from real failures
#[derive(Error, Debug)]
pub enum DocverError {
    /// User dismissed a prompt (Esc / q)
    #[error("Interrupted by user")]
    UserInterrupted,

    /// A required invocation parameter was not supplied
    #[error("Missing required argument: --{0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

/// Result type alias for docver operations
pub type DocverResult<T> = Result<T, DocverError>;

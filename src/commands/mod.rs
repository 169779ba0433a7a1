pub mod completions;
pub mod list_versions;
pub mod register;
pub mod remove_version;

pub use completions::CompletionsCommand;
pub use list_versions::ListVersionsCommand;
pub use register::{register_version, RegisterArgs, RegisterOutcome};
pub use remove_version::{remove_version, RemoveVersionCommand};

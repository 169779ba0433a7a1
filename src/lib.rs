//! # docver
//!
//! Maintains the versions list (`var ar_versions = [...]`) that a documentation
//! site's version switcher includes. Each documentation build registers its
//! version once; the list is kept sorted newest first.
//!
//! ## Library Usage
//!
//! The CLI is a thin layer over [`register_version`], [`remove_version`] and
//! the [`manifest`] module, which can be used directly.
//!
//! RUST LEARNING: `//!` comments are "inner doc comments" for modules/crates
//! - Like JSDoc but built into the language and used by `cargo doc`

// RUST LEARNING: Module declarations - different from TypeScript imports
// - `pub mod` declares a public module (like exporting a namespace)
// - These refer to files/directories: `config.rs` or `manifest/mod.rs`
pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;

// RUST LEARNING: `pub use` re-exports items (like TypeScript's `export { ... } from`)
// - Users can do `use docver::Manifest` instead of `use docver::manifest::Manifest`
pub use config::RegisterConfig;
pub use error::{DocverError, DocverResult};
pub use manifest::{Manifest, ManifestError, ManifestFile, SortKey, VersionEntry};

// Re-export command types for library users who want to use commands programmatically
pub use commands::{
    register_version, remove_version, CompletionsCommand, ListVersionsCommand, RegisterArgs,
    RegisterOutcome, RemoveVersionCommand,
};

/// The current version of the crate
// RUST LEARNING: `env!()` is a macro that reads environment variables at compile time
// - `CARGO_PKG_VERSION` is automatically set from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

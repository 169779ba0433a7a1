use super::format::AsciiPrettyFormatter;
use super::types::Manifest;
use super::{ManifestError, Result};
use log::debug;
use serde::ser::Error as _;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Assignment the site's version switcher includes as a script.
pub const MANIFEST_PREFIX: &str = "var ar_versions = ";

/// Parses manifest text. The script prefix is stripped when present; without
/// it the whole text is parsed as JSON.
pub fn parse_manifest(content: &str) -> serde_json::Result<Manifest> {
    let json = match content.strip_prefix(MANIFEST_PREFIX) {
        Some(rest) => rest,
        None => {
            debug!("Manifest has no `{}` prefix, parsing as plain JSON", MANIFEST_PREFIX.trim_end());
            content
        }
    };
    serde_json::from_str(json)
}

/// Renders the manifest as a script assignment with 2-space indented,
/// ASCII-only JSON. Entry keys keep the order they were read in.
pub fn render_manifest(manifest: &Manifest) -> serde_json::Result<String> {
    let mut out = MANIFEST_PREFIX.as_bytes().to_vec();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, AsciiPrettyFormatter::new());
    manifest.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(serde_json::Error::custom)
}

/// The versions list on disk. Read once, rewritten whole.
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the manifest, or an empty one if the file does not exist.
    pub fn load(&self) -> Result<Manifest> {
        debug!("Loading manifest from: {}", self.path.display());
        if !self.path.exists() {
            debug!("Manifest file not found, starting empty");
            return Ok(Manifest::default());
        }

        let contents = fs::read_to_string(&self.path)?;
        let manifest = parse_manifest(&contents).map_err(|source| ManifestError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!("Manifest loaded with {} entries", manifest.len());
        Ok(manifest)
    }

    pub fn save(&self, manifest: &Manifest) -> Result<()> {
        debug!("Writing manifest to: {}", self.path.display());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = render_manifest(manifest)?;
        fs::write(&self.path, &contents)?;
        debug!("Wrote {} bytes", contents.len());
        Ok(())
    }
}

use crate::error::{DocverError, DocverResult};
use crate::manifest::{self, ManifestError, ManifestFile};
use clap::Args;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RemoveVersionCommand {
    /// Path of the versions file to rewrite
    #[arg(long = "version_file", alias = "version-file", value_name = "PATH")]
    version_file: PathBuf,

    /// Version to remove (exact match)
    version: String,

    /// Remove without confirmation
    #[arg(short, long)]
    yes: bool,
}

/// Drops every entry for `version`, re-sorts and rewrites the file.
/// Returns the number of entries left.
pub fn remove_version(file: &ManifestFile, version: &str) -> manifest::Result<usize> {
    let mut manifest = file.load()?;
    if manifest.remove(version) == 0 {
        return Err(ManifestError::VersionNotFound(version.to_string()));
    }
    manifest.sort_descending();
    file.save(&manifest)?;
    Ok(manifest.len())
}

impl RemoveVersionCommand {
    pub fn execute(&self) -> DocverResult<()> {
        let file = ManifestFile::new(&self.version_file);
        let manifest = file.load()?;

        if !manifest.contains(&self.version) {
            eprintln!("{} Version not found: {}", "Error:".red(), self.version);
            eprintln!("Registered versions:");
            for version in manifest.versions() {
                eprintln!("  - {}", version);
            }
            return Err(ManifestError::VersionNotFound(self.version.clone()).into());
        }

        // Confirm removal unless --yes flag is used
        if !self.yes {
            let confirm = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Remove version '{}'?", self.version))
                .default(false)
                .interact_opt()?;

            match confirm {
                Some(true) => {}
                Some(false) => {
                    println!("Operation cancelled");
                    return Ok(());
                }
                None => return Err(DocverError::UserInterrupted),
            }
        }

        let remaining = remove_version(&file, &self.version)?;

        println!(
            "{} Removed version {} from {}",
            "Success:".green(),
            self.version,
            file.path().display()
        );
        println!(
            "  {} version{} remaining",
            remaining.to_string().cyan(),
            if remaining == 1 { "" } else { "s" }
        );

        Ok(())
    }
}

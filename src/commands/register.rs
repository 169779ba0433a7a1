use crate::config::RegisterConfig;
use crate::error::DocverResult;
use crate::manifest::{self, render_manifest, ManifestFile, VersionEntry};
use clap::Args;
use colored::Colorize;
use log::debug;
use std::path::PathBuf;

/// Arguments of the default action. Required unless a subcommand is given.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Path where the current and updated versions file is stored
    #[arg(long = "version_file", alias = "version-file", value_name = "PATH", required = true)]
    pub version_file: Option<PathBuf>,

    /// Folder name where the version is stored
    #[arg(long, value_name = "NAME", required = true)]
    pub folder: Option<String>,

    /// Version of the generated documentation
    #[arg(long, value_name = "VERSION", required = true)]
    pub version: Option<String>,

    /// Print the updated versions file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The version was already listed; nothing was written
    AlreadyRegistered,
    /// The manifest was rewritten with this many entries
    Written { entries: usize },
    /// Dry run: the text that would have been written
    DryRun(String),
}

/// Load, check, append, sort, write.
pub fn register_version(config: &RegisterConfig) -> manifest::Result<RegisterOutcome> {
    let file = ManifestFile::new(&config.version_file);
    let mut manifest = file.load()?;

    if manifest.contains(&config.version) {
        debug!("Version {} already present", config.version);
        return Ok(RegisterOutcome::AlreadyRegistered);
    }

    manifest.push(VersionEntry::new(&config.version, &config.folder));
    manifest.sort_descending();
    debug!("Sorted versions: {:?}", manifest.versions());

    if config.dry_run {
        return Ok(RegisterOutcome::DryRun(render_manifest(&manifest)?));
    }

    file.save(&manifest)?;
    Ok(RegisterOutcome::Written {
        entries: manifest.len(),
    })
}

impl RegisterArgs {
    pub fn to_config(&self) -> DocverResult<RegisterConfig> {
        RegisterConfig::from_parts(
            self.version_file.clone(),
            self.folder.clone(),
            self.version.clone(),
            self.dry_run,
        )
    }

    pub fn execute(&self) -> DocverResult<()> {
        let config = self.to_config()?;

        match register_version(&config)? {
            RegisterOutcome::AlreadyRegistered => {
                println!(
                    "{} Version already configured. Skipping update!",
                    "Info:".blue()
                );
            }
            RegisterOutcome::DryRun(rendered) => {
                println!("{}", rendered);
            }
            RegisterOutcome::Written { entries } => {
                println!(
                    "{} File updated: {}",
                    "Success:".green(),
                    config.version_file.display()
                );
                debug!("Manifest now lists {} versions", entries);
            }
        }

        Ok(())
    }
}

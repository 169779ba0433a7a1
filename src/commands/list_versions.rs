use crate::error::DocverResult;
use crate::manifest::{Manifest, ManifestFile};
use clap::Args;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ListVersionsCommand {
    /// Path of the versions file to read
    #[arg(long = "version_file", alias = "version-file", value_name = "PATH")]
    version_file: PathBuf,
}

impl ListVersionsCommand {
    pub fn execute(&self) -> DocverResult<()> {
        let file = ManifestFile::new(&self.version_file);
        let manifest = file.load()?;

        if manifest.is_empty() {
            println!(
                "{} No versions registered in {}",
                "Info:".blue(),
                file.path().display()
            );
            println!();
            println!(
                "  Use {} to register one",
                "docver --version_file <path> --folder <folder> --version <version>".cyan()
            );
            return Ok(());
        }

        println!("{}", build_table(&manifest));
        println!();
        println!(
            "{} {} version{}",
            "Total:".dimmed(),
            manifest.len().to_string().cyan(),
            if manifest.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }
}

pub(crate) fn build_table(manifest: &Manifest) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Version").fg(comfy_table::Color::Green),
        Cell::new("Folder").fg(comfy_table::Color::Green),
        Cell::new("PDF").fg(comfy_table::Color::Green),
    ]);

    for entry in manifest.entries() {
        let pdf = match (entry.pdf_name(), entry.has_pdf()) {
            (Some(name), true) => Cell::new(name).fg(comfy_table::Color::Cyan),
            (None, true) => Cell::new("yes").fg(comfy_table::Color::Cyan),
            (_, false) => Cell::new("none").fg(comfy_table::Color::DarkGrey),
        };

        let folder = match entry.folder() {
            Some(folder) => Cell::new(folder),
            None => Cell::new("-").fg(comfy_table::Color::DarkGrey),
        };

        table.add_row(vec![Cell::new(entry.version()), folder, pdf]);
    }

    table
}

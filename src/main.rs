// RUST LEARNING: `use` statements bring items into scope from crates and modules
// - `clap` is a CLI argument parser (similar to commander.js)
// - `docver` refers to our own crate (defined in lib.rs)
use clap::{Parser, Subcommand};
use docver::{
    CompletionsCommand, DocverError, ListVersionsCommand, RegisterArgs, RemoveVersionCommand,
    VERSION,
};
use log::debug;
use std::env;

// RUST LEARNING: `#[derive(Parser)]` generates command-line parsing code for the struct
// - `disable_version_flag` frees `--version` for the version being registered
// - `subcommand_negates_reqs` makes the register arguments optional when a subcommand runs
#[derive(Parser)]
#[command(name = "docver")]
#[command(
    about = "Register a documentation build in the versions list read by the docs version switcher"
)]
#[command(
    disable_version_flag = true,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    register: RegisterArgs,

    /// Enable debug logging
    #[arg(short = 'd', long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered versions
    #[command(alias = "ls")]
    List(ListVersionsCommand),

    /// Remove a version from the versions file
    #[command(alias = "rm")]
    Remove(RemoveVersionCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

// RUST LEARNING: `anyhow::Result<()>` returned from main prints the error and exits non-zero
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "docver=debug");
    }
    env_logger::init();
    debug!("docver {}", VERSION);

    let result = match cli.command {
        Some(Commands::List(cmd)) => cmd.execute(),
        Some(Commands::Remove(cmd)) => cmd.execute(),
        Some(Commands::Completions(cmd)) => {
            cmd.generate_completions::<Cli>();
            Ok(())
        }
        // RUST LEARNING: `None` means no subcommand: register the version
        None => cli.register.execute(),
    };

    match result {
        Ok(()) => Ok(()),
        Err(DocverError::UserInterrupted) => {
            std::process::exit(0);
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::path::PathBuf;

    #[test]
    fn test_parse_register_arguments() {
        let cli = Cli::try_parse_from([
            "docver",
            "--version_file",
            "public/js/versions.js",
            "--folder",
            "2_1_0_ar_stable",
            "--version",
            "2.1.0@ar/stable",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        let config = cli.register.to_config().unwrap();
        assert_eq!(config.version_file, PathBuf::from("public/js/versions.js"));
        assert_eq!(config.folder, "2_1_0_ar_stable");
        assert_eq!(config.version, "2.1.0@ar/stable");
        assert!(!config.dry_run);
    }

    #[test]
    fn test_parse_kebab_case_alias_and_dry_run() {
        let cli = Cli::try_parse_from([
            "docver",
            "--version-file",
            "versions.js",
            "--folder",
            "master",
            "--version",
            "master",
            "--dry-run",
            "-d",
        ])
        .unwrap();

        assert!(cli.debug);
        assert!(cli.register.to_config().unwrap().dry_run);
    }

    #[test]
    fn test_missing_argument_is_usage_error() {
        let result = Cli::try_parse_from([
            "docver",
            "--version_file",
            "versions.js",
            "--version",
            "master",
        ]);

        match result {
            Err(err) => assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument),
            Ok(_) => panic!("Expected missing --folder to fail"),
        }
    }

    #[test]
    fn test_subcommand_does_not_need_register_arguments() {
        let cli = Cli::try_parse_from(["docver", "list", "--version_file", "versions.js"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(_))));

        let cli = Cli::try_parse_from([
            "docver",
            "remove",
            "--version_file",
            "versions.js",
            "master",
            "--yes",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Remove(_))));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_completions_name_the_binary_and_flags() {
        let cli = Cli::try_parse_from(["docver", "completions", "bash"]).unwrap();
        let cmd = match cli.command {
            Some(Commands::Completions(cmd)) => cmd,
            _ => panic!("Expected completions subcommand"),
        };
        assert_eq!(cmd.shell(), clap_complete::Shell::Bash);

        let mut out = Vec::new();
        cmd.write_completions::<Cli>(&mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("docver"));
        assert!(script.contains("--version_file"));
    }
}

mod check;
mod completions;
mod generate;
mod init;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for genbuilder_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "genbuilder")]
#[command(version)]
#[command(about = "Generate Go builders and immutable value types from TOML definitions")]
pub(crate) struct Cli {
    /// Show debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate builder and immutable Go files from genbuilder.toml
    Generate(GenerateCommand),

    /// Validate genbuilder.toml without generating code
    Check(CheckCommand),

    /// Write a starter genbuilder.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["genbuilder", "check", "-v"]).expect("parses");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "genbuilder",
            "generate",
            "-s",
            "types.json",
            "-o",
            "out/models",
            "-p",
            "models",
            "--dry-run",
            "--no-format",
        ])
        .expect("parses");

        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.schema, std::path::PathBuf::from("types.json"));
        assert_eq!(cmd.output, Some(std::path::PathBuf::from("out/models")));
        assert_eq!(cmd.package.as_deref(), Some("models"));
        assert!(cmd.dry_run);
        assert!(cmd.no_format);
    }

    #[test]
    fn test_schema_defaults_to_genbuilder_toml() {
        let cli = Cli::try_parse_from(["genbuilder", "init"]).expect("parses");
        let Commands::Init(cmd) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(
            cmd.schema,
            std::path::PathBuf::from(genbuilder_schema::DEFAULT_SCHEMA_FILE)
        );
    }
}

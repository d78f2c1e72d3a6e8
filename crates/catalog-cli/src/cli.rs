//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use crate::input::SplitMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Catalog CLI - Extract structured course records from free-text catalogs.
#[derive(Debug, Parser)]
#[command(name = "catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CATALOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract records from documents and print them
    Extract(ExtractArgs),

    /// Extract records and overwrite a database table with them
    Load(LoadArgs),

    /// Print the records stored in a database table
    Show(ShowArgs),

    /// Print the effective configuration, or write it out with --init
    Config(ConfigArgs),
}

/// Documents to extract from.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Text files, or directories of .txt files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// How a file is split into documents
    #[arg(short, long, value_enum, default_value = "whole")]
    pub split: SplitMode,

    /// Documents processed concurrently (overrides the config file)
    #[arg(short, long)]
    pub workers: Option<usize>,
}

/// Arguments for the extract command.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the load command.
#[derive(Debug, Args)]
pub struct LoadArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// SQLite database file (overrides the config file)
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Target table (overrides the config file)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Read the table back and compare it with what was written
    #[arg(long)]
    pub verify: bool,
}

/// Arguments for the show command.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// SQLite database file (overrides the config file)
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Table to read (overrides the config file)
    #[arg(short, long)]
    pub table: Option<String>,
}

/// Arguments for the config command.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Write the configuration to the --config path (or ~/.catalog/config.toml)
    #[arg(long)]
    pub init: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract() {
        let cli = Cli::parse_from(["catalog", "extract", "a.txt", "docs", "--split", "lines", "-w", "2"]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.input.paths, vec![PathBuf::from("a.txt"), PathBuf::from("docs")]);
                assert_eq!(args.input.split, SplitMode::Lines);
                assert_eq!(args.input.workers, Some(2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_load_with_global_flags() {
        let cli = Cli::parse_from([
            "catalog", "load", "docs", "--table", "courses", "--verify", "--format", "json", "--no-color",
        ]);
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Load(args) => {
                assert_eq!(args.table.as_deref(), Some("courses"));
                assert!(args.verify);
                assert_eq!(args.input.split, SplitMode::Whole);
                assert!(args.database.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::parse_from(["catalog", "config", "--init", "-c", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Command::Config(ConfigArgs { init: true })));
    }

    #[test]
    fn test_extract_requires_paths() {
        assert!(Cli::try_parse_from(["catalog", "extract"]).is_err());
    }
}

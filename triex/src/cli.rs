// triex/src/cli.rs
//! This file defines the command-line interface (CLI) for the triex application,
//! including all available commands and their arguments.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use std::path::PathBuf;

use triex_core::{ConfigOverrides, TriexConfig};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "triex",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tool to generate semi-minimized regular expression alternations.",
    long_about = "Triex reads a list of values and writes a single regular expression alternation that matches exactly those values. Shared prefixes are factored out, single-character branches are collapsed into character classes, and values that prefix other values become optional suffixes.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Disable all logging, including warnings.
    #[arg(long, short = 'q', global = true, conflicts_with = "debug", help = "Suppress all log messages.")]
    pub quiet: bool,

    #[command(flatten)]
    pub pattern: PatternArgs,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand. They are global, so they may appear
/// before or after the subcommand name.
#[derive(Args, Debug, Default, Clone)]
pub struct PatternArgs {
    /// Enclose the pattern in boundary tokens.
    #[arg(
        long,
        short = 'b',
        global = true,
        help = "Enclose pattern in boundary tokens (\"\\b\"). A non-capturing group is added when neither -c or -n is passed."
    )]
    pub boundary: bool,

    /// Enclose the pattern in a capturing group.
    #[arg(long, short = 'c', global = true, conflicts_with = "non_capture", help = "Enclose pattern in a capturing group.")]
    pub capture: bool,

    /// Enclose the pattern in a non-capturing group.
    #[arg(long = "non-capture", short = 'n', global = true, help = "Enclose pattern in a non-capturing group.")]
    pub non_capture: bool,

    /// The string separating values in the input.
    #[arg(
        long,
        short = 'd',
        global = true,
        value_name = "STR",
        help = "The character(s) that separate values in the input. [default: \"\\n\"]"
    )]
    pub delimiter: Option<String>,

    /// Fail on the first value that cannot be added instead of skipping it.
    #[arg(long, global = true, help = "Fail on the first value that cannot be added instead of skipping it.")]
    pub strict: bool,

    /// Read input as a JSON array of values instead of delimited text.
    #[arg(long, global = true, help = "Read input as a JSON array of values instead of delimited text.")]
    pub json: bool,

    /// Path to a YAML configuration file with default options.
    #[arg(long, global = true, env = "TRIEX_CONFIG", value_name = "FILE", help = "Path to a YAML configuration file with default options.")]
    pub config: Option<PathBuf>,
}

impl PatternArgs {
    /// The requested grouping: `Some(true)` for `-c`, `Some(false)` for `-n`,
    /// `None` when neither was passed.
    pub fn capturing(&self) -> Option<bool> {
        if self.capture {
            Some(true)
        } else if self.non_capture {
            Some(false)
        } else {
            None
        }
    }

    /// Loads the configuration file (if any) and layers the flags on top.
    pub fn resolve_config(&self, suffix: Option<String>) -> Result<TriexConfig> {
        let base = match &self.config {
            Some(path) => TriexConfig::load_from_file(path)?,
            None => TriexConfig::default(),
        };

        let overrides = ConfigOverrides {
            boundary: self.boundary.then_some(true),
            capturing: self.capturing(),
            delimiter: self.delimiter.clone(),
            suffix,
            strict: self.strict.then_some(true),
        };

        let config = base
            .apply_overrides(overrides)
            .context("Invalid command-line options")?;
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}

/// All available commands for the `triex` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Converts input to a regex pattern.
    #[command(about = "Convert input to a regex pattern.")]
    Convert(ConvertCommand),

    /// Converts each file to a pattern written next to it.
    #[command(
        about = "Batch convert file contents to patterns.",
        long_about = "Batch convert file contents to patterns.\n\nPatterns are written to separate files with the --suffix value inserted before the extension:\n\nsource.txt > source.<suffix>.txt"
    )]
    Batch(BatchCommand),
}

/// Arguments for the `convert` command.
#[derive(Parser, Debug)]
pub struct ConvertCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long = "in", short = 'i', value_name = "FILE", help = "The input file. [default: stdin]")]
    pub input: Option<PathBuf>,

    /// Write the pattern to this file instead of stdout.
    #[arg(long = "out", short = 'o', value_name = "FILE", help = "The output file. [default: stdout]")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `batch` command.
#[derive(Parser, Debug)]
pub struct BatchCommand {
    /// Suffix inserted before the extension of each output file.
    #[arg(long, short = 's', value_name = "SUFFIX", help = "The suffix to add to the output file names. [default: triex]")]
    pub suffix: Option<String>,

    /// The files to convert.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["triex", "convert", "-b", "-n", "-d", "::"]).unwrap();
        assert!(cli.pattern.boundary);
        assert_eq!(cli.pattern.capturing(), Some(false));
        assert_eq!(cli.pattern.delimiter.as_deref(), Some("::"));
    }

    #[test]
    fn test_global_options_before_subcommand() {
        let cli = Cli::try_parse_from(["triex", "-c", "batch", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.pattern.capturing(), Some(true));
        match cli.command {
            Commands::Batch(cmd) => assert_eq!(cmd.files.len(), 2),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_capture_flags_conflict() {
        assert!(Cli::try_parse_from(["triex", "convert", "-c", "-n"]).is_err());
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = PatternArgs::default().resolve_config(None).unwrap();
        assert_eq!(config, TriexConfig::default());
    }
}

// triex/src/lib.rs
//! # Triex CLI Application
//!
//! This crate provides the command-line interface for `triex-core`: it reads
//! delimited text (or a JSON array), builds a trie, and writes the generated
//! regex alternation.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

use anyhow::Result;
use log::debug;

use cli::{Cli, Commands};
use commands::batch::{run_batch, BatchOptions};
use commands::convert::{run_convert, ConvertOptions};

/// Dispatches a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    debug!("triex started. Version: {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Convert(cmd) => {
            let config = cli.pattern.resolve_config(None)?;
            run_convert(ConvertOptions {
                input: cmd.input,
                output: cmd.output,
                json: cli.pattern.json,
                config,
            })
        }
        Commands::Batch(cmd) => {
            let config = cli.pattern.resolve_config(cmd.suffix)?;
            run_batch(BatchOptions {
                files: cmd.files,
                json: cli.pattern.json,
                config,
            })
        }
    }
}

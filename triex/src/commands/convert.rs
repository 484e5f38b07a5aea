//! The `convert` command: one input, one pattern.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use triex_core::TriexConfig;

use crate::utils::ingest::build_trie;

/// Options for [`run_convert`].
pub struct ConvertOptions {
    /// Input file; stdin when `None`.
    pub input: Option<PathBuf>,
    /// Output file; stdout when `None`.
    pub output: Option<PathBuf>,
    pub json: bool,
    pub config: TriexConfig,
}

/// Reads values, builds the pattern and writes it followed by a newline.
pub fn run_convert(opts: ConvertOptions) -> Result<()> {
    info!("Starting convert operation.");
    debug!("Preparing input data");

    let raw = read_input(opts.input.as_ref())?;
    let raw = raw.as_deref().map(str::trim_end).unwrap_or_default();

    if raw.is_empty() {
        bail!("No input provided");
    }

    let trie = build_trie(raw, &opts.config, opts.json)?;

    debug!("Generating regex");
    let pattern = trie.to_pattern(opts.config.boundary, opts.config.capturing);

    write_output(opts.output.as_ref(), &pattern)?;

    info!("Convert operation completed.");
    Ok(())
}

/// Returns `None` when reading from a stdin attached to a terminal.
fn read_input(path: Option<&PathBuf>) -> Result<Option<String>> {
    match path {
        Some(path) => {
            debug!("Reading input from {}", path.display());
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            Ok(Some(text))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Ok(None);
            }
            debug!("Reading input from stdin...");
            let mut text = String::new();
            stdin
                .lock()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Ok(Some(text))
        }
    }
}

fn write_output(path: Option<&PathBuf>, pattern: &str) -> Result<()> {
    match path {
        Some(path) => {
            debug!("Writing regex to {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", pattern)?;
        }
        None => {
            debug!("Writing regex to stdout");
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", pattern)?;
        }
    }
    Ok(())
}

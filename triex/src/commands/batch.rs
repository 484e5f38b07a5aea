//! The `batch` command: one pattern file per input file.
//!
//! `source.txt` is written to `source.<suffix>.txt` in the same directory.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use triex_core::TriexConfig;

use crate::ui::output_format::warn_msg;
use crate::utils::ingest::build_trie;

/// Options for [`run_batch`].
pub struct BatchOptions {
    pub files: Vec<PathBuf>,
    pub json: bool,
    pub config: TriexConfig,
}

/// Converts every file. Empty files are skipped with a warning.
pub fn run_batch(opts: BatchOptions) -> Result<()> {
    debug!("Converting {} files", opts.files.len());

    for file in &opts.files {
        if !file.is_file() {
            bail!("File does not exist: {}", file.display());
        }
    }

    for file in &opts.files {
        info!("Converting {}", file.display());

        let raw = fs::read_to_string(file)
            .with_context(|| format!("Failed to read input file: {}", file.display()))?;
        let raw = raw.trim_end();

        if raw.is_empty() {
            warn_msg(format!("File is empty: {}", file.display()));
            continue;
        }

        let trie = build_trie(raw, &opts.config, opts.json)
            .with_context(|| format!("Failed to convert {}", file.display()))?;

        debug!("Generating regex");
        let pattern = trie.to_pattern(opts.config.boundary, opts.config.capturing);

        let out = output_path(file, &opts.config.suffix);
        debug!("Writing regex to {}", out.display());
        fs::write(&out, format!("{}\n", pattern))
            .with_context(|| format!("Failed to write output file: {}", out.display()))?;

        info!("Wrote {}", out.display());
    }

    Ok(())
}

/// Inserts `suffix` between the file stem and its extension.
pub fn output_path(file: &Path, suffix: &str) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match file.extension() {
        Some(ext) => format!("{}.{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}.{}", stem, suffix),
    };

    file.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(Path::new("dir/source.txt"), "triex"), PathBuf::from("dir/source.triex.txt"));
        assert_eq!(output_path(Path::new("a.tar.gz"), "rx"), PathBuf::from("a.tar.rx.gz"));
        assert_eq!(output_path(Path::new("words"), "triex"), PathBuf::from("words.triex"));
        assert_eq!(output_path(Path::new(".hidden"), "triex"), PathBuf::from(".hidden.triex"));
    }
}

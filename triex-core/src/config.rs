//! Configuration management for `triex-core`.
//!
//! A `TriexConfig` holds the defaults a caller applies when turning input into
//! a pattern: grouping and boundary options, the value delimiter, the batch
//! output suffix and the insertion mode. It can be loaded from YAML and then
//! overridden field by field from command-line flags.
//!
//! License: MIT

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::TriexError;

/// Default suffix inserted before the extension of batch output files.
pub const DEFAULT_SUFFIX: &str = "triex";

/// Characters that end a line when no delimiter is configured. `\r\n` counts
/// as a single break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Defaults for pattern generation and input handling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TriexConfig {
    /// Enclose the pattern in `\b` boundary tokens.
    pub boundary: bool,
    /// `Some(true)` for a capturing group, `Some(false)` for non-capturing,
    /// `None` to leave the choice to the boundary normalization.
    pub capturing: Option<bool>,
    /// Separator between input values. `None` splits on line breaks.
    pub delimiter: Option<String>,
    /// Suffix for batch output files (`source.<suffix>.txt`).
    pub suffix: String,
    /// Fail on the first value that cannot be coerced to text.
    pub strict: bool,
}

impl Default for TriexConfig {
    fn default() -> Self {
        Self {
            boundary: false,
            capturing: None,
            delimiter: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            strict: false,
        }
    }
}

/// Command-line overrides. Unset fields keep the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub boundary: Option<bool>,
    pub capturing: Option<bool>,
    pub delimiter: Option<String>,
    pub suffix: Option<String>,
    pub strict: Option<bool>,
}

impl TriexConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from {}", path.display());

        let text = fs::read_to_string(path)
            .map_err(TriexError::from)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: TriexConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Rejects values that would produce unusable output.
    pub fn validate(&self) -> Result<(), TriexError> {
        if matches!(self.delimiter.as_deref(), Some("")) {
            return Err(TriexError::Config("delimiter must not be empty".to_string()));
        }
        if self.suffix.is_empty() {
            return Err(TriexError::Config("suffix must not be empty".to_string()));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(TriexError::Config(format!(
                "suffix must not contain path separators: '{}'",
                self.suffix
            )));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, TriexError> {
        if let Some(boundary) = overrides.boundary {
            self.boundary = boundary;
        }
        if overrides.capturing.is_some() {
            self.capturing = overrides.capturing;
        }
        if overrides.delimiter.is_some() {
            self.delimiter = overrides.delimiter;
        }
        if let Some(suffix) = overrides.suffix {
            self.suffix = suffix;
        }
        if let Some(strict) = overrides.strict {
            self.strict = strict;
        }

        self.validate()?;
        Ok(self)
    }

    /// Splits raw input into candidate values.
    ///
    /// Trailing whitespace is trimmed first. Without a delimiter the input is
    /// split on any line break: `\n`, `\r\n`, a bare `\r`, the vertical tab,
    /// form feed and separator controls, `NEL` and the Unicode line and
    /// paragraph separators.
    pub fn split_values<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        let raw = raw.trim_end();
        match self.delimiter.as_deref() {
            Some(delimiter) => raw.split(delimiter).collect(),
            None => split_lines(raw),
        }
    }
}

fn split_lines(raw: &str) -> Vec<&str> {
    let mut values = Vec::new();
    let mut start = 0;
    let mut chars = raw.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        values.push(&raw[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }

    if start < raw.len() {
        values.push(&raw[start..]);
    }
    values
}

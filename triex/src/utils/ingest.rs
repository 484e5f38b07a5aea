// triex/src/utils/ingest.rs
//! Turns raw input text into a populated `Trie`.

use anyhow::{Context, Result};
use log::debug;

use triex_core::{InputValue, Trie, TriexConfig};

use crate::ui::output_format::warn_msg;

/// Parses `raw` into values and inserts them into a new trie.
///
/// Delimited text is split per `config`; with `json` set the input must be a
/// JSON array whose elements are inserted as typed values. Values that cannot
/// be added are reported as warnings, or fail the whole input when
/// `config.strict` is set.
pub fn build_trie(raw: &str, config: &TriexConfig, json: bool) -> Result<Trie> {
    let values: Vec<InputValue> = if json {
        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(raw).context("Input is not a valid JSON array")?;
        parsed.into_iter().map(InputValue::from).collect()
    } else {
        config.split_values(raw).into_iter().map(InputValue::from).collect()
    };

    debug!("Generating trie from {} value(s)", values.len());

    let mut trie = Trie::new();
    let outcome = trie
        .add(values, config.strict)
        .context("Input contains a value that cannot be added")?;

    for value in &outcome.invalid {
        warn_msg(format!("Skipping value that cannot be added: {}", value));
    }

    debug!("Trie created with {} value(s)", trie.len());
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_trie_from_lines() {
        let trie = build_trie("foo\nbar\nfoo\n", &TriexConfig::default(), false).unwrap();
        assert_eq!(trie.members(), vec!["bar", "foo"]);
    }

    #[test]
    fn test_build_trie_from_json() {
        let trie = build_trie(r#"["foo", 1, 1.0, null]"#, &TriexConfig::default(), true).unwrap();
        assert_eq!(trie.members(), vec!["1", "1.0", "foo"]);
        assert_eq!(trie.invalid().len(), 1);
    }

    #[test]
    fn test_build_trie_strict_json_fails() {
        let config = TriexConfig { strict: true, ..TriexConfig::default() };
        let err = build_trie(r#"["foo", null]"#, &config, true).unwrap_err();
        assert!(format!("{:#}", err).contains("Cannot add value null of type null"));
    }

    #[test]
    fn test_build_trie_rejects_non_array_json() {
        assert!(build_trie(r#"{"a": 1}"#, &TriexConfig::default(), true).is_err());
    }
}

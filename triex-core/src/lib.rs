// triex-core/src/lib.rs
//! # Triex Core Library
//!
//! `triex-core` compiles a set of strings into a single regular-expression
//! alternation that matches exactly that set. Common prefixes are shared,
//! single-character tails are folded into character classes, and members that
//! are prefixes of other members become optional suffixes.
//!
//! The library is pure: it performs no I/O beyond optional config loading and
//! holds no global state.
//!
//! ## Modules
//!
//! * `value`: The closed set of raw input types and their coercion to text.
//! * `trie`: The prefix tree holding deduplicated member strings.
//! * `pattern`: The builder that walks a prefix tree and emits the pattern.
//! * `config`: Defaults for pattern options and input splitting, loadable from YAML.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use triex_core::Trie;
//!
//! let trie = Trie::from_values(["foo", "foobar", "foobaz", "bar", "bat"]);
//!
//! assert_eq!(trie.to_pattern(false, None), "ba[rt]|foo(?:ba[rz])?");
//! assert_eq!(trie.to_pattern(true, None), r"\b(?:ba[rt]|foo(?:ba[rz])?)\b");
//! assert_eq!(trie.to_pattern(true, Some(true)), r"\b(ba[rt]|foo(?:ba[rz])?)\b");
//! ```
//!
//! ## Error Handling
//!
//! Only strict insertion can fail, with [`TriexError::Coercion`]. Pattern
//! construction never fails.
//!
//! ---
//! License: MIT

pub mod config;
pub mod errors;
pub mod pattern;
pub mod trie;
pub mod value;

pub use config::{ConfigOverrides, TriexConfig, DEFAULT_SUFFIX};
pub use errors::{CoercionError, TriexError};
pub use pattern::{escape_class, escape_literal, PatternBuilder};
pub use trie::{AddOutcome, Trie, TrieNode};
pub use value::{InputValue, UnsupportedValue};

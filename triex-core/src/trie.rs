//! trie.rs - The prefix tree that stores member strings.
//!
//! The `Trie` keeps a deduplicated set of text members together with a tree
//! keyed by character. Raw values are coerced to text on the way in; values
//! that cannot be coerced are either recorded as invalid or rejected outright,
//! depending on the insertion mode.
//!
//! License: MIT

use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::errors::{CoercionError, TriexError};
use crate::pattern::PatternBuilder;
use crate::value::{InputValue, UnsupportedValue};

/// A single node of the prefix tree.
///
/// Children are kept in an ordered map, so iterating them always yields
/// characters in ascending code-point order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Child nodes keyed by the character that leads to them.
    pub fn children(&self) -> &BTreeMap<char, TrieNode> {
        &self.children
    }

    /// Looks up the child reached through `c`.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// True iff a member string ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// True iff the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// Tear down iteratively; the derived drop would recurse once per character
// of the longest member.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// Outcome of a single [`Trie::add`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Number of new members inserted by the call.
    pub inserted: usize,
    /// Values from the call that could not be coerced, in encounter order.
    pub invalid: Vec<UnsupportedValue>,
}

/// A deduplicated set of strings stored as a prefix tree.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    members: BTreeSet<String>,
    invalid: Vec<UnsupportedValue>,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a trie from an initial batch, recording invalid values.
    ///
    /// A single scalar works as well as a sequence, since `Option<T>` and
    /// `Vec<T>` both iterate.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<InputValue>,
    {
        let mut trie = Self::new();
        trie.add_silent(values);
        trie
    }

    /// Adds values to the trie.
    ///
    /// In non-strict mode every value that cannot be coerced is appended to
    /// [`Trie::invalid`] and the rest are inserted. In strict mode the first
    /// such value is recorded as invalid and fails the call; no member from
    /// the call is inserted.
    pub fn add<I>(&mut self, values: I, strict: bool) -> Result<AddOutcome, TriexError>
    where
        I: IntoIterator,
        I::Item: Into<InputValue>,
    {
        let mut coerced = Vec::new();
        let mut invalid = Vec::new();

        for value in values {
            match value.into().coerce() {
                Ok(text) => coerced.push(text),
                Err(value) if strict => {
                    debug!("Rejecting batch: value {} cannot be coerced.", value);
                    self.invalid.push(value.clone());
                    return Err(CoercionError { value }.into());
                }
                Err(value) => invalid.push(value),
            }
        }

        let pruned = self.prune(coerced);
        let inserted = pruned.len();
        for text in pruned {
            self.insert(text);
        }

        self.invalid.extend(invalid.iter().cloned());

        debug!(
            "Inserted {} value(s); {} invalid value(s) recorded. Trie now holds {} member(s).",
            inserted,
            invalid.len(),
            self.members.len()
        );

        Ok(AddOutcome { inserted, invalid })
    }

    /// Non-strict [`Trie::add`], which cannot fail.
    pub fn add_silent<I>(&mut self, values: I) -> AddOutcome
    where
        I: IntoIterator,
        I::Item: Into<InputValue>,
    {
        // Non-strict insertion never errors.
        self.add(values, false).unwrap_or_default()
    }

    /// All members in ascending code-point order.
    pub fn members(&self) -> Vec<&str> {
        self.members.iter().map(String::as_str).collect()
    }

    /// All recorded invalid values in ascending order.
    pub fn invalid(&self) -> Vec<&UnsupportedValue> {
        let mut invalid: Vec<&UnsupportedValue> = self.invalid.iter().collect();
        invalid.sort();
        invalid
    }

    /// The root of the prefix tree.
    pub fn structure(&self) -> &TrieNode {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.members.contains(text)
    }

    /// Builds the regex alternation for the current members.
    ///
    /// See [`PatternBuilder`] for how `boundary` and `capturing` interact.
    pub fn to_pattern(&self, boundary: bool, capturing: Option<bool>) -> String {
        PatternBuilder::new(&self.root, boundary, capturing).pattern()
    }

    /// Drops values already present in the trie or seen earlier in the batch.
    fn prune(&self, values: Vec<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        values
            .into_iter()
            .filter(|v| !self.members.contains(v) && seen.insert(v.clone()))
            .collect()
    }

    fn insert(&mut self, text: String) {
        let mut node = &mut self.root;
        for c in text.chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
        self.members.insert(text);
    }
}

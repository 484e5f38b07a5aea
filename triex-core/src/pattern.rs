//! pattern.rs - Compiles a prefix tree into a regex alternation.
//!
//! The builder walks a [`TrieNode`] tree once and emits a single alternation
//! that matches exactly the stored members. Sibling branches that are a single
//! character with nothing after them are folded into a character class, and
//! members that are prefixes of other members turn the remaining suffix into
//! an optional group.
//!
//! For example the members `foo`, `foobar`, `foobaz`, `bar` and `bat` become
//! `ba[rt]|foo(?:ba[rz])?`.
//!
//! License: MIT

use log::debug;
use std::collections::btree_map;

use crate::trie::TrieNode;

/// Characters escaped outside a character class.
const LITERAL_SPECIALS: &[char] = &['.', '^', '$', '*', '+', '?', '(', ')', '[', '{', '\\', '|'];

/// Characters escaped inside a character class.
const CLASS_SPECIALS: &[char] = &['^', '-', ']', '\\'];

/// Escapes `c` for use as a literal outside a character class.
pub fn escape_literal(c: char) -> String {
    escape(c, LITERAL_SPECIALS)
}

/// Escapes `c` for use inside a bracketed character class.
pub fn escape_class(c: char) -> String {
    escape(c, CLASS_SPECIALS)
}

fn escape(c: char, specials: &[char]) -> String {
    if specials.contains(&c) {
        format!("\\{}", c)
    } else {
        c.to_string()
    }
}

/// Joins class members into one alternate: a bare character for a single
/// member, a bracketed class otherwise. Each character is escaped for the
/// context it ends up in.
fn make_char_class(chars: &[char]) -> String {
    match chars {
        [single] => escape_literal(*single),
        _ => format!("[{}]", chars.iter().map(|&c| escape_class(c)).collect::<String>()),
    }
}

/// Joins alternates with `|`. Nested alternations are wrapped in a
/// non-capturing group; the outermost one never is.
fn make_alternates(alternates: &[String], is_outermost: bool) -> String {
    match alternates {
        [single] => single.clone(),
        _ if is_outermost => alternates.join("|"),
        _ => format!("(?:{})", alternates.join("|")),
    }
}

/// Makes `pattern` optional. `non_class_count` is the number of alternates
/// that were not folded into the character class; when it is zero the
/// pattern is a single atom and a bare `?` suffices.
fn make_optional(pattern: &str, non_class_count: usize) -> String {
    if non_class_count < 1 {
        format!("{}?", pattern)
    } else {
        format!("(?:{})?", pattern)
    }
}

/// One pending node of the depth-first walk.
struct Frame<'a> {
    node: &'a TrieNode,
    /// The character leading into `node`; `None` for the root.
    edge: Option<char>,
    pending: btree_map::Iter<'a, char, TrieNode>,
    alternates: Vec<String>,
    /// Unescaped characters of leaf children.
    class_chars: Vec<char>,
}

impl<'a> Frame<'a> {
    fn new(node: &'a TrieNode, edge: Option<char>) -> Self {
        Self {
            node,
            edge,
            pending: node.children().iter(),
            alternates: Vec::new(),
            class_chars: Vec::new(),
        }
    }

    /// Combines the collected branches of a fully visited node.
    fn finish(mut self, is_outermost: bool) -> String {
        let non_class_count = self.alternates.len();

        if !self.class_chars.is_empty() {
            self.alternates.push(make_char_class(&self.class_chars));
        }

        let combined = make_alternates(&self.alternates, is_outermost);

        if self.node.is_terminal() {
            make_optional(&combined, non_class_count)
        } else {
            combined
        }
    }
}

/// Emits the minimized alternation for `root`.
///
/// Returns `None` when `root` has no children. The walk uses an explicit
/// stack, so its depth is not limited by the thread stack.
pub fn emit(root: &TrieNode) -> Option<String> {
    if root.is_leaf() {
        return None;
    }

    let mut stack = vec![Frame::new(root, None)];

    loop {
        let frame = stack.last_mut()?;

        if let Some((&c, child)) = frame.pending.next() {
            if child.is_leaf() {
                frame.class_chars.push(c);
            } else {
                stack.push(Frame::new(child, Some(c)));
            }
            continue;
        }

        let frame = stack.pop()?;
        let edge = frame.edge;
        let sub = frame.finish(stack.is_empty());

        match (stack.last_mut(), edge) {
            (Some(parent), Some(c)) => parent.alternates.push(escape_literal(c) + &sub),
            _ => return Some(sub),
        }
    }
}

/// Builds the final pattern string for a prefix tree.
///
/// When `boundary` is requested and `capturing` is left unset, `capturing` is
/// normalized to `Some(false)` so the `\b` tokens anchor the whole alternation
/// rather than its first and last branches.
#[derive(Debug, Clone, Copy)]
pub struct PatternBuilder<'a> {
    root: &'a TrieNode,
    boundary: bool,
    capturing: Option<bool>,
}

impl<'a> PatternBuilder<'a> {
    pub fn new(root: &'a TrieNode, boundary: bool, capturing: Option<bool>) -> Self {
        let capturing = match capturing {
            None if boundary => Some(false),
            other => other,
        };

        Self {
            root,
            boundary,
            capturing,
        }
    }

    pub fn boundary(&self) -> bool {
        self.boundary
    }

    /// `Some(true)` for a capturing group, `Some(false)` for a non-capturing
    /// group, `None` for no group at all.
    pub fn capturing(&self) -> Option<bool> {
        self.capturing
    }

    /// The finalized pattern. An empty tree yields an empty body, still
    /// wrapped in whatever group and boundary tokens were requested.
    pub fn pattern(&self) -> String {
        let body = emit(self.root).unwrap_or_default();

        let grouped = match self.capturing {
            Some(true) => format!("({})", body),
            Some(false) => format!("(?:{})", body),
            None => body,
        };

        let pattern = if self.boundary {
            format!("\\b{}\\b", grouped)
        } else {
            grouped
        };

        debug!("Generated pattern of {} byte(s).", pattern.len());
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Trie;

    #[test]
    fn test_escape_literal() {
        for c in ['.', '^', '$', '*', '+', '?', '(', ')', '[', '{', '\\', '|'] {
            assert_eq!(escape_literal(c), format!("\\{}", c));
        }
        for c in ['a', '-', ']', '}', '1', ' '] {
            assert_eq!(escape_literal(c), c.to_string());
        }
    }

    #[test]
    fn test_escape_class() {
        for c in ['^', '-', ']', '\\'] {
            assert_eq!(escape_class(c), format!("\\{}", c));
        }
        for c in ['$', '.', '*', '|', '(', '[', 'a'] {
            assert_eq!(escape_class(c), c.to_string());
        }
    }

    #[test]
    fn test_make_alternates() {
        let one = vec!["foo".to_string()];
        let two = vec!["foo".to_string(), "bar".to_string()];

        assert_eq!(make_alternates(&one, true), "foo");
        assert_eq!(make_alternates(&one, false), "foo");
        assert_eq!(make_alternates(&two, true), "foo|bar");
        assert_eq!(make_alternates(&two, false), "(?:foo|bar)");
    }

    #[test]
    fn test_make_char_class() {
        assert_eq!(make_char_class(&['A']), "A");
        assert_eq!(make_char_class(&['A', 'B']), "[AB]");
        assert_eq!(make_char_class(&['.']), r"\.");
        assert_eq!(make_char_class(&['.', '-']), r"[.\-]");
    }

    #[test]
    fn test_emit_lone_special_uses_literal_escape() {
        assert_eq!(emit(Trie::from_values(["("]).structure()).as_deref(), Some(r"\("));
        assert_eq!(emit(Trie::from_values(["f", "f("]).structure()).as_deref(), Some(r"f\(?"));
        assert_eq!(emit(Trie::from_values(["a", "a["]).structure()).as_deref(), Some(r"a\[?"));
        assert_eq!(emit(Trie::from_values(["a", "a-"]).structure()).as_deref(), Some("a-?"));
    }

    #[test]
    fn test_make_optional() {
        assert_eq!(make_optional("foo|bar", 0), "foo|bar?");
        assert_eq!(make_optional("foo|bar", 1), "(?:foo|bar)?");
    }

    #[test]
    fn test_emit_folds_classes_and_optionals() {
        let trie = Trie::from_values(["foo", "bar", "ba$", "ba-", "foos", "x.y"]);
        assert_eq!(emit(trie.structure()).as_deref(), Some(r"ba[$\-r]|foos?|x\.y"));
    }

    #[test]
    fn test_emit_empty_tree() {
        assert_eq!(emit(Trie::new().structure()), None);
    }

    #[test]
    fn test_emit_single_character_members() {
        let trie = Trie::from_values(["a", "b", "c"]);
        assert_eq!(emit(trie.structure()).as_deref(), Some("[abc]"));

        let trie = Trie::from_values(["a"]);
        assert_eq!(emit(trie.structure()).as_deref(), Some("a"));
    }

    #[test]
    fn test_emit_mixed_optional_suffix() {
        // "ab" is terminal with a literal branch and a class branch; the
        // nested alternation keeps its own group inside the optional one.
        let trie = Trie::from_values(["ab", "abc", "abd", "abxy"]);
        assert_eq!(emit(trie.structure()).as_deref(), Some("ab(?:(?:xy|[cd]))?"));
    }

    #[test]
    fn test_capturing_normalization() {
        let root = TrieNode::default();

        assert_eq!(PatternBuilder::new(&root, true, None).capturing(), Some(false));
        assert_eq!(PatternBuilder::new(&root, true, Some(true)).capturing(), Some(true));
        assert_eq!(PatternBuilder::new(&root, true, Some(false)).capturing(), Some(false));
        assert_eq!(PatternBuilder::new(&root, false, None).capturing(), None);
        assert_eq!(PatternBuilder::new(&root, false, Some(true)).capturing(), Some(true));
        assert!(PatternBuilder::new(&root, true, None).boundary());
    }

    #[test]
    fn test_empty_tree_pattern() {
        let root = TrieNode::default();

        assert_eq!(PatternBuilder::new(&root, false, None).pattern(), "");
        assert_eq!(PatternBuilder::new(&root, false, Some(true)).pattern(), "()");
        assert_eq!(PatternBuilder::new(&root, true, None).pattern(), r"\b(?:)\b");
    }

    #[test]
    fn test_deep_member_does_not_overflow() {
        let deep = "a".repeat(20_000);
        let trie = Trie::from_values([deep.clone()]);
        assert_eq!(trie.to_pattern(false, None), deep);
    }
}

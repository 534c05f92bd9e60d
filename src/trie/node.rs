//! Trie node type

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single node in the trie
///
/// Each node maps the next character to an exclusively-owned child and
/// carries a terminal marker meaning "a word ends here". The root node
/// represents the empty prefix. Children live in a `BTreeMap` so
/// traversals visit them in character order regardless of the order
/// words were inserted in.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TrieNode {
    /// Children indexed by the next character
    pub(crate) children: BTreeMap<char, TrieNode>,
    /// Whether a stored word ends at this node
    pub(crate) terminal: bool,
}

impl TrieNode {
    /// Create an empty, non-terminal node
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Whether a stored word ends at this node
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether this node has no children and no terminal marker
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && !self.terminal
    }

    /// Look up the child for a character
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Get the child for a character, creating it if absent
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }
}

//! The trie word index

use super::{Direction, Matches, TrieNode};
use crate::snapshot::{self, Snapshot};
use crate::Result;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// A prefix-tree index over a set of words
///
/// Supports insertion, exact membership tests, and ordered prefix
/// enumeration. Two search modes are provided:
///
/// - [`shallow_prefix_search`](Trie::shallow_prefix_search) — a capped,
///   UI-friendly head-and-tail sample of the matches
/// - [`deep_prefix_search`](Trie::deep_prefix_search) — every match
///   under a prefix
///
/// An optional fast-membership set keeps a copy of every inserted word
/// so [`contains`](Trie::contains) is a hash lookup instead of a path
/// walk, trading memory for speed on large word lists.
///
/// Deletion is not supported.
pub struct Trie {
    /// Root node, representing the empty prefix
    root: TrieNode,
    /// Number of distinct words stored
    word_count: usize,
    /// Fast-membership set, present iff the optimization is enabled
    words: Option<HashSet<String>>,
}

impl Trie {
    /// Create a new empty trie
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            word_count: 0,
            words: None,
        }
    }

    /// Create a new empty trie with the fast-membership set enabled
    pub fn with_fast_membership() -> Self {
        Trie {
            root: TrieNode::new(),
            word_count: 0,
            words: Some(HashSet::new()),
        }
    }

    /// Whether the fast-membership set is enabled
    pub fn fast_membership(&self) -> bool {
        self.words.is_some()
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether the trie stores no words
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }

    // === Mutation ===

    /// Insert a word
    ///
    /// Builds the character path from the root and marks the final node
    /// terminal. Re-inserting a word that is already present changes
    /// nothing: the terminal marker on the reached node is checked
    /// before the word count is incremented, so `len()` counts distinct
    /// words on both membership paths. The empty string is a valid word
    /// and marks the root terminal.
    pub fn insert(&mut self, word: &str) {
        if let Some(words) = &mut self.words {
            if words.contains(word) {
                return;
            }
            words.insert(word.to_string());
        }

        let mut curr = &mut self.root;
        for c in word.chars() {
            curr = curr.child_or_insert(c);
        }

        if !curr.terminal {
            curr.terminal = true;
            self.word_count += 1;
        }
    }

    /// Insert every word from an iterable, in order
    ///
    /// No atomicity across the batch: each word is inserted
    /// independently.
    pub fn insert_many<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    // === Membership ===

    /// Exact membership test
    ///
    /// Uses the fast-membership set when enabled, otherwise walks the
    /// character path and checks the terminal marker.
    pub fn contains(&self, word: &str) -> bool {
        if let Some(words) = &self.words {
            return words.contains(word);
        }

        let mut curr = &self.root;
        for c in word.chars() {
            match curr.child(c) {
                Some(child) => curr = child,
                None => return false,
            }
        }
        curr.is_terminal()
    }

    // === Search ===

    /// Locate the subtree root for a prefix
    ///
    /// `None` means the whole trie. Returns the reached node and the
    /// consumed prefix as the accumulator seed for enumeration, or
    /// `None` when some character of the prefix is absent (distinct
    /// from reaching a node with no children).
    fn prefix_node(&self, prefix: Option<&str>) -> Option<(&TrieNode, String)> {
        let prefix = match prefix {
            None => return Some((&self.root, String::new())),
            Some(p) => p,
        };

        let mut curr = &self.root;
        for c in prefix.chars() {
            curr = curr.child(c)?;
        }
        Some((curr, prefix.to_string()))
    }

    /// Lazily enumerate the words below a prefix
    ///
    /// Words come out in strict lexicographic order, ascending for
    /// [`Direction::Forward`] and descending for [`Direction::Reverse`].
    /// An absent prefix yields an empty iterator.
    pub fn matches(&self, prefix: Option<&str>, direction: Direction) -> Matches<'_> {
        match self.prefix_node(prefix) {
            Some((start, seed)) => Matches::new(start, seed, direction),
            None => Matches::empty(direction),
        }
    }

    /// Bounded prefix search, sized for interactive display
    ///
    /// Pulls up to `max / 2` words from the ascending enumeration and
    /// up to `max / 2` from the descending one, and returns their union
    /// sorted ascending. When the true match count is at most `max` the
    /// result is the complete sorted match set; beyond that it is the
    /// lexicographically first and last `max / 2` matches — a
    /// head-and-tail sample. `max` is expected to be even.
    pub fn shallow_prefix_search(&self, prefix: Option<&str>, max: usize) -> Vec<String> {
        let half = max / 2;

        let mut merged: BTreeSet<String> =
            self.matches(prefix, Direction::Forward).take(half).collect();
        merged.extend(self.matches(prefix, Direction::Reverse).take(half));

        merged.into_iter().collect()
    }

    /// Exhaustive prefix search
    ///
    /// Materializes every word below the prefix, ascending. Intended
    /// for small-to-moderate result sets; cost is proportional to the
    /// number of matches and their total length. A word equal to the
    /// prefix itself comes first.
    pub fn deep_prefix_search(&self, prefix: Option<&str>) -> Vec<String> {
        self.matches(prefix, Direction::Forward).collect()
    }

    // === Persistence ===

    /// Save the index to a snapshot file
    ///
    /// Writes the whole index as one compressed blob, to a temporary
    /// file first and then renamed over `path`, so a prior snapshot is
    /// replaced all-or-nothing.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        snapshot::save(self, path)
    }

    /// Load an index from a snapshot file
    ///
    /// Reconstructs the tree, word count, and fast-membership state.
    /// Failures (unreadable file, bad magic, version mismatch,
    /// truncated or corrupt body) construct nothing, so a caller
    /// refreshing a live index can assign over it only on `Ok`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        snapshot::load(path)
    }

    /// Load a snapshot if it exists, otherwise start empty
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    pub(crate) fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            root: self.root.clone(),
            word_count: self.word_count as u64,
            words: self.words.clone(),
        }
    }

    pub(crate) fn from_snapshot(snapshot: Snapshot) -> Self {
        Trie {
            root: snapshot.root,
            word_count: snapshot.word_count as usize,
            words: snapshot.words,
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

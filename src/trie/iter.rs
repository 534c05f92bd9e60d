//! Lazy enumeration of the words below a prefix
//!
//! A single depth-first traversal driven by an explicit work-stack,
//! exposed as an `Iterator`. Using our own stack instead of native
//! recursion keeps enumeration safe for arbitrarily long words, and the
//! iterator form lets callers stop pulling at any point — the bounded
//! shallow search takes a handful of words from each direction, the
//! deep search collects everything.

use super::TrieNode;

/// Direction of enumeration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Ascending lexicographic order
    Forward,
    /// Descending lexicographic order
    Reverse,
}

/// A unit of pending traversal work
enum Frame<'a> {
    /// A subtree still to be explored, with the word spelled so far
    Node(&'a TrieNode, String),
    /// A complete word ready to be emitted
    Word(String),
}

/// Lazy iterator over the words below a prefix node
///
/// Yields words in strict lexicographic order by character, ascending
/// for [`Direction::Forward`] and descending for [`Direction::Reverse`].
/// Never mutates the trie; dropping it early is free. A fresh iterator
/// over the same trie reproduces the same sequence.
pub struct Matches<'a> {
    stack: Vec<Frame<'a>>,
    direction: Direction,
}

impl<'a> Matches<'a> {
    /// Start enumeration at a subtree root, seeded with the consumed prefix
    pub(crate) fn new(start: &'a TrieNode, seed: String, direction: Direction) -> Self {
        Matches {
            stack: vec![Frame::Node(start, seed)],
            direction,
        }
    }

    /// An enumeration that yields nothing (prefix not present)
    pub(crate) fn empty(direction: Direction) -> Self {
        Matches {
            stack: Vec::new(),
            direction,
        }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // The stack pops in reverse push order, so whatever should be
        // emitted first must be pushed last. Forward: push children
        // from largest to smallest character, then the node's own word
        // on top, so a word precedes all of its extensions. Reverse:
        // push the node's own word first and children from smallest to
        // largest, so extensions precede the word.
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Word(word) => return Some(word),
                Frame::Node(node, acc) => match self.direction {
                    Direction::Forward => {
                        for (c, child) in node.children.iter().rev() {
                            let mut next = acc.clone();
                            next.push(*c);
                            self.stack.push(Frame::Node(child, next));
                        }
                        if node.terminal {
                            self.stack.push(Frame::Word(acc));
                        }
                    }
                    Direction::Reverse => {
                        if node.terminal {
                            self.stack.push(Frame::Word(acc.clone()));
                        }
                        for (c, child) in node.children.iter() {
                            let mut next = acc.clone();
                            next.push(*c);
                            self.stack.push(Frame::Node(child, next));
                        }
                    }
                },
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::trie::{Direction, Trie, TrieNode};

    /// Recursion-based reference traversal, used to pin the work-stack
    /// engine to the obviously-correct formulation.
    fn collect_recursive(node: &TrieNode, acc: String, direction: Direction, out: &mut Vec<String>) {
        match direction {
            Direction::Forward => {
                if node.is_terminal() {
                    out.push(acc.clone());
                }
                for (c, child) in &node.children {
                    let mut next = acc.clone();
                    next.push(*c);
                    collect_recursive(child, next, direction, out);
                }
            }
            Direction::Reverse => {
                for (c, child) in node.children.iter().rev() {
                    let mut next = acc.clone();
                    next.push(*c);
                    collect_recursive(child, next, direction, out);
                }
                if node.is_terminal() {
                    out.push(acc);
                }
            }
        }
    }

    fn sample_trie() -> Trie {
        let mut trie = Trie::new();
        // Deliberately unsorted insertion order
        trie.insert_many(["dog", "card", "a", "cat", "car", "do", ""]);
        trie
    }

    #[test]
    fn test_forward_is_ascending() {
        let trie = sample_trie();
        let words: Vec<String> = trie.matches(None, Direction::Forward).collect();
        assert_eq!(words, ["", "a", "car", "card", "cat", "do", "dog"]);
    }

    #[test]
    fn test_reverse_is_descending() {
        let trie = sample_trie();
        let words: Vec<String> = trie.matches(None, Direction::Reverse).collect();
        assert_eq!(words, ["dog", "do", "cat", "card", "car", "a", ""]);
    }

    #[test]
    fn test_stack_engine_matches_recursive_reference() {
        let trie = sample_trie();
        for direction in [Direction::Forward, Direction::Reverse] {
            let lazy: Vec<String> = trie.matches(None, direction).collect();
            let mut reference = Vec::new();
            collect_recursive(trie.root(), String::new(), direction, &mut reference);
            assert_eq!(lazy, reference);
        }
    }

    #[test]
    fn test_prefix_seeds_accumulator() {
        let trie = sample_trie();
        let words: Vec<String> = trie.matches(Some("ca"), Direction::Forward).collect();
        assert_eq!(words, ["car", "card", "cat"]);
    }

    #[test]
    fn test_missing_prefix_yields_nothing() {
        let trie = sample_trie();
        assert_eq!(trie.matches(Some("zz"), Direction::Forward).count(), 0);
    }

    #[test]
    fn test_early_stop_is_safe_and_restartable() {
        let trie = sample_trie();
        let first_two: Vec<String> = trie.matches(None, Direction::Forward).take(2).collect();
        assert_eq!(first_two, ["", "a"]);

        // A fresh call reproduces the same sequence from the start
        let again: Vec<String> = trie.matches(None, Direction::Forward).take(2).collect();
        assert_eq!(first_two, again);
    }
}

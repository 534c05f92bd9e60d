//! The prefix-tree word index
//!
//! - [`node`] defines the owned tree of character nodes
//! - [`tree`] defines the [`Trie`] and its insert/search operations
//! - [`iter`] defines the lazy [`Matches`] enumerator

mod iter;
mod node;
mod tree;

pub use iter::{Direction, Matches};
pub use node::TrieNode;
pub use tree::Trie;

//! # lexitrie
//!
//! A trie-backed word index with bounded prefix search and snapshot
//! persistence.
//!
//! lexitrie stores a word list in a prefix tree and answers exact
//! membership tests and ordered prefix queries. Two retrieval modes are
//! offered: a bounded "shallow" search that returns a head-and-tail
//! sample of matches (sized for interactive display), and an exhaustive
//! "deep" search that returns every match under a prefix. The whole
//! index can be saved to a compressed snapshot file so large word lists
//! don't have to be re-inserted on every start.
//!
//! ## Core Concepts
//!
//! - **Trie**: the word index itself, an owned tree of character nodes
//! - **Matches**: a lazy iterator over the words below a prefix, in
//!   ascending or descending lexicographic order
//! - **Snapshot**: an opaque on-disk cache of the full index
//! - **SearchHistory**: a bounded log of recently-searched prefixes
//!
//! ## Example
//!
//! ```
//! use lexitrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert_many(["cat", "car", "card", "dog"]);
//! assert!(trie.contains("car"));
//! assert_eq!(trie.deep_prefix_search(Some("ca")), ["car", "card", "cat"]);
//! ```

pub mod definitions;
pub mod history;
pub mod snapshot;
pub mod trie;

mod error;

pub use definitions::Definitions;
pub use error::{Error, Result};
pub use history::SearchHistory;
pub use trie::{Direction, Matches, Trie};

/// Snapshot format version for compatibility checks
pub const VERSION: u32 = 1;

/// Magic bytes for snapshot file identification
pub const MAGIC: &[u8; 8] = b"LEXITRIE";

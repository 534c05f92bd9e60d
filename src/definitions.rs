//! Word-definitions lookup
//!
//! A host-supplied dataset mapping each word to its list of definition
//! strings, loaded from a JSON file of the shape
//! `{"word": ["definition", ...], ...}`. Keyed by exact word and
//! entirely independent of the trie: the index answers *which* words
//! match a prefix, this answers *what they mean*.

use crate::Result;
use std::collections::HashMap;
use std::path::Path;

/// A word → definitions dictionary
#[derive(Debug, Default)]
pub struct Definitions {
    entries: HashMap<String, Vec<String>>,
}

impl Definitions {
    /// Load a definitions dataset from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries = serde_json::from_str(&content)?;
        Ok(Definitions { entries })
    }

    /// Look up the definitions for an exact word
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// The words this dataset covers, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of words with definitions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

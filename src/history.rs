//! Bounded log of recently-searched terms
//!
//! Kept by the host frontend, not by the trie: searches append their
//! prefix here, oldest entries fall off over capacity, and the log is
//! persisted as a small JSON file independent of the index snapshot.
//! Defaults to `<data dir>/lexi/recent.json`.

use crate::{Error, Result};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Default capacity of the recently-searched log
pub const DEFAULT_CAPACITY: usize = 20;

/// A bounded, persisted FIFO of distinct search terms
#[derive(Debug)]
pub struct SearchHistory {
    /// Oldest first
    entries: VecDeque<String>,
    capacity: usize,
    /// Where the log is persisted; `None` for an in-memory log
    path: Option<PathBuf>,
}

impl SearchHistory {
    /// Create an in-memory log with the given capacity
    pub fn new(capacity: usize) -> Self {
        SearchHistory {
            entries: VecDeque::new(),
            capacity,
            path: None,
        }
    }

    /// Open a log backed by a JSON file, loading it if it exists
    pub fn open(path: impl AsRef<Path>, capacity: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut entries: VecDeque<String> = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            VecDeque::new()
        };

        // A log written with a larger capacity gets trimmed from the front
        while entries.len() > capacity {
            entries.pop_front();
        }

        Ok(SearchHistory {
            entries,
            capacity,
            path: Some(path),
        })
    }

    /// The default log path (`<data dir>/lexi/recent.json`)
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("Could not find data directory".into()))?
            .join("lexi");

        std::fs::create_dir_all(&data_dir)
            .map_err(|e| Error::Config(format!("Failed to create data dir: {}", e)))?;

        Ok(data_dir.join("recent.json"))
    }

    /// Record a term, if it isn't already present
    ///
    /// The oldest entry is evicted once the log is over capacity.
    /// Returns whether the term was newly added.
    pub fn record(&mut self, term: &str) -> bool {
        if self.entries.iter().any(|e| e == term) {
            return false;
        }

        self.entries.push_back(term.to_string());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        true
    }

    /// The recorded terms, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of recorded terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all recorded terms
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Persist the log to its backing file
    ///
    /// A no-op for an in-memory log.
    pub fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path,
            None => return Ok(()),
        };

        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

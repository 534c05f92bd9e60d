//! Snapshot persistence for the trie
//!
//! File format:
//! ```text
//! [HEADER: 12 bytes]
//!   - magic: 8 bytes ("LEXITRIE")
//!   - version: 4 bytes (u32 LE)
//!
//! [BODY: variable]
//!   - zstd-compressed bincode of Snapshot
//! ```
//!
//! The snapshot is an internal acceleration cache, not an interchange
//! format: it exists so a large word list doesn't have to be
//! re-inserted on every start. The header only guards against feeding
//! the wrong file or the wrong format version back in.

use crate::trie::{Trie, TrieNode};
use crate::{Error, Result, MAGIC, VERSION};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER_SIZE: usize = 12;

/// The persisted state of a [`Trie`]
#[derive(Serialize, Deserialize)]
pub(crate) struct Snapshot {
    /// The node tree
    pub(crate) root: TrieNode,
    /// Number of distinct words stored
    pub(crate) word_count: u64,
    /// Fast-membership set, present iff the optimization was enabled
    pub(crate) words: Option<HashSet<String>>,
}

/// Serialize a trie and write it to `path`
///
/// The bytes go to a temporary file in the same directory first and are
/// renamed into place, so any prior snapshot at `path` is replaced
/// all-or-nothing and a crash mid-write never leaves a half snapshot
/// under the real name.
pub(crate) fn save(trie: &Trie, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let body = bincode::serialize(&trie.to_snapshot())?;
    let compressed = zstd::encode_all(body.as_slice(), 3)?;

    let mut data = Vec::with_capacity(HEADER_SIZE + compressed.len());
    data.extend_from_slice(MAGIC);
    data.extend_from_slice(&VERSION.to_le_bytes());
    data.extend(compressed);

    let tmp = path.with_extension("lexitrie.tmp");
    {
        let mut file = File::create(&tmp)?;
        file.write_all(&data)?;
        file.sync_all()?;
    }
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// Read a snapshot from `path` and reconstruct the trie
///
/// Returns an error on unreadable input, wrong magic bytes, a format
/// version this build doesn't understand, or a truncated/corrupt body.
/// Nothing is constructed on failure.
pub(crate) fn load(path: impl AsRef<Path>) -> Result<Trie> {
    let data = std::fs::read(path)?;

    if data.len() < HEADER_SIZE {
        return Err(Error::InvalidFile("shorter than header".into()));
    }
    if &data[0..8] != MAGIC {
        return Err(Error::InvalidFile("invalid magic bytes".into()));
    }

    let version = u32::from_le_bytes(data[8..12].try_into().unwrap());
    if version != VERSION {
        return Err(Error::VersionMismatch {
            expected: VERSION,
            found: version,
        });
    }

    let body = zstd::decode_all(&data[HEADER_SIZE..])
        .map_err(|e| Error::Corruption(format!("snapshot body: {}", e)))?;
    let snapshot: Snapshot = bincode::deserialize(&body)?;

    Ok(Trie::from_snapshot(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Direction;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.lexitrie");

        let mut trie = Trie::new();
        trie.insert_many(["cat", "car", "card", "dog", ""]);
        trie.save(&path).unwrap();

        let restored = Trie::load(&path).unwrap();
        assert_eq!(restored.len(), trie.len());
        assert!(!restored.fast_membership());
        assert_eq!(
            restored.deep_prefix_search(None),
            trie.deep_prefix_search(None)
        );
        for word in ["cat", "car", "card", "dog", ""] {
            assert!(restored.contains(word));
        }
        assert!(!restored.contains("ca"));
    }

    #[test]
    fn test_round_trip_preserves_fast_membership() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.lexitrie");

        let mut trie = Trie::with_fast_membership();
        trie.insert_many(["hey", "hello"]);
        trie.save(&path).unwrap();

        let restored = Trie::load(&path).unwrap();
        assert!(restored.fast_membership());
        assert!(restored.contains("hello"));
        assert_eq!(restored.len(), 2);
    }

    #[test]
    fn test_round_trip_preserves_ordering() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.lexitrie");

        let mut trie = Trie::new();
        trie.insert_many(["melon", "fig", "mango", "grape"]);
        trie.save(&path).unwrap();

        let restored = Trie::load(&path).unwrap();
        for direction in [Direction::Forward, Direction::Reverse] {
            let original: Vec<String> = trie.matches(None, direction).collect();
            let reloaded: Vec<String> = restored.matches(None, direction).collect();
            assert_eq!(original, reloaded);
        }
    }

    #[test]
    fn test_save_replaces_prior_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.lexitrie");

        let mut first = Trie::new();
        first.insert("old");
        first.save(&path).unwrap();

        let mut second = Trie::new();
        second.insert_many(["new", "newer"]);
        second.save(&path).unwrap();

        let restored = Trie::load(&path).unwrap();
        assert!(!restored.contains("old"));
        assert_eq!(restored.len(), 2);
    }

    #[test]
    fn test_load_rejects_bad_magic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bogus.lexitrie");
        std::fs::write(&path, b"NOT_A_SNAPSHOT_FILE").unwrap();

        assert!(matches!(Trie::load(&path), Err(Error::InvalidFile(_))));
    }

    #[test]
    fn test_load_rejects_wrong_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.lexitrie");

        let mut data = Vec::new();
        data.extend_from_slice(MAGIC);
        data.extend_from_slice(&99u32.to_le_bytes());
        std::fs::write(&path, data).unwrap();

        assert!(matches!(
            Trie::load(&path),
            Err(Error::VersionMismatch {
                expected: VERSION,
                found: 99
            })
        ));
    }

    #[test]
    fn test_load_rejects_truncated_body() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.lexitrie");

        let mut trie = Trie::new();
        trie.insert_many(["cat", "dog"]);
        trie.save(&path).unwrap();

        let mut data = std::fs::read(&path).unwrap();
        data.truncate(data.len() - 4);
        std::fs::write(&path, data).unwrap();

        assert!(Trie::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.lexitrie");

        assert!(matches!(Trie::load(&path), Err(Error::Io(_))));
    }

    #[test]
    fn test_load_or_default_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.lexitrie");

        let trie = Trie::load_or_default(&path).unwrap();
        assert!(trie.is_empty());
    }
}

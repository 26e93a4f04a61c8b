//! Content-addressed data module store.
//!
//! Payloads are keyed by a blake3 hash of `(source identity, projection)`,
//! so a payload referenced by multiple routes is serialized and written
//! exactly once and every route shares the same blob reference.
//!
//! Writing is deferred: the store accumulates serialized JSON in memory
//! while routes are emitted, then `write_all` fans the files out in
//! parallel. Each entry targets a unique file name, so concurrent writes
//! never touch the same resource.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Directory the data modules live in, relative to the output root.
pub const DATA_DIR: &str = "_data";

/// Hash prefix length for data file names (16 hex chars).
const FILE_NAME_HASH_BYTES: usize = 8;

// ============================================================================
// Data Reference
// ============================================================================

/// Reference to a serialized data module, as stored in a route's
/// `data_refs`. Serializes as the output-relative file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataRef(String);

impl DataRef {
    /// Output-relative path of the referenced file.
    pub fn path(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Data Store
// ============================================================================

/// Accumulates serialized payloads for the parallel write phase.
#[derive(Debug, Default)]
pub struct DataStore {
    /// file name → serialized JSON
    entries: BTreeMap<String, String>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `payload` under the content-addressed name for
    /// `(identity, projection)` and return a reference to it.
    ///
    /// A repeated `(identity, projection)` reuses the existing blob
    /// instead of serializing again.
    pub fn insert<T: Serialize>(
        &mut self,
        identity: &str,
        projection: &str,
        payload: &T,
    ) -> Result<DataRef> {
        let name = data_file_name(identity, projection);

        if !self.entries.contains_key(&name) {
            let json = serde_json::to_string_pretty(payload)
                .with_context(|| format!("failed to serialize payload for `{identity}`"))?;
            self.entries.insert(name.clone(), json);
        }

        Ok(DataRef(format!("{DATA_DIR}/{name}")))
    }

    /// Number of unique data modules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every data module under `dir`, in parallel.
    ///
    /// `on_progress` is called once per file from worker threads.
    pub fn write_all(&self, dir: &Path, on_progress: impl Fn() + Sync) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create data directory {}", dir.display()))?;

        self.entries.par_iter().try_for_each(|(name, json)| {
            fs::write(dir.join(name), json)
                .with_context(|| format!("failed to write data module {name}"))?;
            on_progress();
            Ok(())
        })
    }
}

/// Stable file name for a payload: blake3 over identity and projection.
fn data_file_name(identity: &str, projection: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(identity.as_bytes());
    hasher.update(b"\0");
    hasher.update(projection.as_bytes());
    let hash = hasher.finalize();
    format!("{}.json", hex::encode(&hash.as_bytes()[..FILE_NAME_HASH_BYTES]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_name_is_stable() {
        assert_eq!(
            data_file_name("posts/hello.md", "item"),
            data_file_name("posts/hello.md", "item")
        );
    }

    #[test]
    fn test_file_name_varies_by_identity_and_projection() {
        let a = data_file_name("posts/hello.md", "item");
        let b = data_file_name("posts/other.md", "item");
        let c = data_file_name("posts/hello.md", "listing");
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_file_name_shape() {
        let name = data_file_name("x", "y");
        assert!(name.ends_with(".json"));
        // 8 bytes -> 16 hex chars + ".json"
        assert_eq!(name.len(), 16 + 5);
    }

    #[test]
    fn test_insert_reuses_blob() {
        let mut store = DataStore::new();
        let first = store.insert("posts/hello.md", "item", &42u32).unwrap();
        let second = store.insert("posts/hello.md", "item", &42u32).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_data_ref_path_includes_dir() {
        let mut store = DataStore::new();
        let r = store.insert("posts/hello.md", "item", &1u8).unwrap();
        assert!(r.path().starts_with("_data/"));
        assert!(r.path().ends_with(".json"));
    }

    #[test]
    fn test_write_all_creates_files() {
        let dir = TempDir::new().unwrap();
        let mut store = DataStore::new();
        let a = store.insert("a", "item", &serde_json::json!({"n": 1})).unwrap();
        let b = store.insert("b", "item", &serde_json::json!({"n": 2})).unwrap();

        store.write_all(dir.path(), || {}).unwrap();

        for r in [&a, &b] {
            let name = r.path().strip_prefix("_data/").unwrap();
            let written = std::fs::read_to_string(dir.path().join(name)).unwrap();
            assert!(written.contains("\"n\""));
        }
    }

    #[test]
    fn test_write_all_progress_called_per_file() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let dir = TempDir::new().unwrap();
        let mut store = DataStore::new();
        store.insert("a", "item", &1u8).unwrap();
        store.insert("b", "item", &2u8).unwrap();
        store.insert("c", "item", &3u8).unwrap();

        let calls = AtomicUsize::new(0);
        store
            .write_all(dir.path(), || {
                calls.fetch_add(1, Ordering::Relaxed);
            })
            .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 3);
    }
}

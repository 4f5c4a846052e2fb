//! Key-value store
//!
//! A JSON-encoded, string-keyed store over a directory of files, standing in
//! for browser local storage. Every operation swallows its own failure: a
//! read or decode problem is logged and surfaced as `None`, a write problem
//! as `false`. Nothing raises past this boundary, and each call is its own
//! atomic unit with no transactional grouping across keys.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

/// Persistent string-keyed JSON store backed by a directory.
///
/// Keys double as file stems, so they should stay filesystem-friendly; the
/// storefront only ever uses short ASCII keys (`user`, `catalog`).
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens a store over the given directory, creating it if necessary.
    ///
    /// A directory that cannot be created is logged and left to fail on the
    /// individual operations instead.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();

        if let Err(err) = fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), %err, "failed to create store directory");
        }

        Store { dir }
    }

    /// The directory backing this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads and decodes the value under `key`.
    ///
    /// Returns `None` for a missing key, and also (after logging) for an
    /// unreadable or undecodable one.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let contents = match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(key, %err, "store read failed");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, %err, "store decode failed");
                None
            }
        }
    }

    /// Encodes and writes `value` under `key`, replacing any previous value.
    ///
    /// Returns `false` (after logging) when encoding or writing fails.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(key, %err, "store encode failed");
                return false;
            }
        };

        match fs::write(self.path_for(key), encoded) {
            Ok(()) => true,
            Err(err) => {
                warn!(key, %err, "store write failed");
                false
            }
        }
    }

    /// Removes the value under `key`. Removing an absent key succeeds.
    pub fn remove(&self, key: &str) -> bool {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => true,
            Err(err) if err.kind() == io::ErrorKind::NotFound => true,
            Err(err) => {
                warn!(key, %err, "store remove failed");
                false
            }
        }
    }

    /// Removes every value in the store. Only the store's own `.json` files
    /// are touched; anything else in the directory is left alone.
    pub fn clear(&self) -> bool {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %self.dir.display(), %err, "store clear failed");
                return false;
            }
        };

        let mut cleared = true;

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(err) => {
                    warn!(dir = %self.dir.display(), %err, "store clear failed");
                    cleared = false;
                    continue;
                }
            };

            if path.extension().is_some_and(|ext| ext == "json") {
                if let Err(err) = fs::remove_file(&path) {
                    warn!(path = %path.display(), %err, "store clear failed");
                    cleared = false;
                }
            }
        }

        cleared
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::open(dir.path());

        (dir, store)
    }

    #[test]
    fn get_missing_key_is_none() {
        let (_dir, store) = temp_store();

        assert_eq!(store.get::<Vec<String>>("absent"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let (_dir, store) = temp_store();
        let value = vec!["a".to_owned(), "b".to_owned()];

        assert!(store.set("list", &value));
        assert_eq!(store.get::<Vec<String>>("list"), Some(value));
    }

    #[test]
    fn set_replaces_previous_value() {
        let (_dir, store) = temp_store();

        assert!(store.set("n", &1_u32));
        assert!(store.set("n", &2_u32));
        assert_eq!(store.get::<u32>("n"), Some(2));
    }

    #[test]
    fn undecodable_value_is_none() -> TestResult {
        let (dir, store) = temp_store();

        fs::write(dir.path().join("bad.json"), "not json at all")?;

        assert_eq!(store.get::<u32>("bad"), None);

        Ok(())
    }

    #[test]
    fn remove_is_idempotent() {
        let (_dir, store) = temp_store();

        assert!(store.set("gone", &true));
        assert!(store.remove("gone"));
        assert_eq!(store.get::<bool>("gone"), None);
        assert!(store.remove("gone"));
    }

    #[test]
    fn clear_removes_only_store_files() -> TestResult {
        let (dir, store) = temp_store();

        assert!(store.set("a", &1_u32));
        assert!(store.set("b", &2_u32));
        fs::write(dir.path().join("notes.txt"), "keep me")?;

        assert!(store.clear());
        assert_eq!(store.get::<u32>("a"), None);
        assert_eq!(store.get::<u32>("b"), None);
        assert!(dir.path().join("notes.txt").exists());

        Ok(())
    }
}

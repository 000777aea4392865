//! Key-value storage backends
//!
//! A minimal `get`/`set`/`remove` surface with an explicit `sync` step.
//! Mutations are batched in memory and made durable in a single `sync`, so a
//! multi-field save is never observable half-written.

use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error making a store durable
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to write save file: {err}"),
            Self::Serialize(err) => write!(f, "Failed to encode save data: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

/// String-keyed storage with batched durability
///
/// `set`/`remove` only stage changes; `sync` commits them all at once.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);

    /// Make all staged mutations durable in one step
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing resource cannot be written.
    fn sync(&mut self) -> Result<(), StoreError>;
}

/// In-memory store, used by tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// File-backed store holding a single JSON object
///
/// `sync` rewrites the whole file through a temp file plus rename, so a torn
/// write can never surface as a partially-valid save. A missing or corrupt
/// file degrades to an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl JsonFileStore {
    #[must_use]
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(err) => {
                    log::warn!("Ignoring corrupt save file {}: {err}", path.display());
                    FxHashMap::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(err) => {
                log::warn!("Ignoring unreadable save file {}: {err}", path.display());
                FxHashMap::default()
            }
        };

        Self { path, entries }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(&self.entries)?;

        // Write-then-rename within the same directory keeps the swap atomic
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, encoded)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("key"), None);

        store.set("key", "value".to_string());
        assert_eq!(store.get("key"), Some("value"));

        store.set("key", "other".to_string());
        assert_eq!(store.get("key"), Some("other"));

        store.remove("key");
        assert_eq!(store.get("key"), None);

        assert!(store.sync().is_ok());
    }

    #[test]
    fn file_store_round_trips_through_disk() {
        let path = std::env::temp_dir().join("wordle_game_kv_roundtrip.json");
        fs::remove_file(&path).ok();

        let mut store = JsonFileStore::open(&path);
        store.set("target_word", "\"apple\"".to_string());
        store.set("attempt_count", "2".to_string());
        store.sync().unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("target_word"), Some("\"apple\""));
        assert_eq!(reopened.get("attempt_count"), Some("2"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let path = std::env::temp_dir().join("wordle_game_kv_missing.json");
        fs::remove_file(&path).ok();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("target_word"), None);
    }

    #[test]
    fn file_store_corrupt_file_is_empty() {
        let path = std::env::temp_dir().join("wordle_game_kv_corrupt.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("target_word"), None);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn file_store_remove_persists_after_sync() {
        let path = std::env::temp_dir().join("wordle_game_kv_remove.json");
        fs::remove_file(&path).ok();

        let mut store = JsonFileStore::open(&path);
        store.set("key", "\"v\"".to_string());
        store.sync().unwrap();

        store.remove("key");
        store.sync().unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("key"), None);

        fs::remove_file(&path).ok();
    }
}

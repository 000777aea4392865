//! In-progress game persistence
//!
//! One game at a time is saved under four fixed keys. Loading is deliberately
//! forgiving: any missing or malformed field means "no saved game", never an
//! error, so stale or hand-edited saves can only cost the player a resume.

mod kv;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};

use serde::{Deserialize, Serialize};

const KEY_TARGET_WORD: &str = "target_word";
const KEY_ATTEMPTS: &str = "attempts";
const KEY_ATTEMPT_COUNT: &str = "attempt_count";
const KEY_ACTIVE_ROW: &str = "active_row";

const ALL_KEYS: [&str; 4] = [
    KEY_TARGET_WORD,
    KEY_ATTEMPTS,
    KEY_ATTEMPT_COUNT,
    KEY_ACTIVE_ROW,
];

/// Serialized form of an in-progress game
///
/// `attempts` holds the submitted guesses in order; a trailing entry shorter
/// than 5 letters is the partially-typed row, which the engine re-derives on
/// restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub target_word: String,
    pub attempts: Vec<String>,
    pub attempt_count: usize,
    pub active_row: usize,
}

/// Save/load/clear for the singleton in-progress game
#[derive(Debug)]
pub struct GameStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> GameStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a game, overwriting any prior save
    ///
    /// All four fields are staged and committed in a single sync.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing store cannot be written.
    pub fn save(&mut self, saved: &SavedGame) -> Result<(), StoreError> {
        self.store.set(
            KEY_TARGET_WORD,
            serde_json::to_string(&saved.target_word)?,
        );
        self.store
            .set(KEY_ATTEMPTS, serde_json::to_string(&saved.attempts)?);
        self.store.set(
            KEY_ATTEMPT_COUNT,
            serde_json::to_string(&saved.attempt_count)?,
        );
        self.store
            .set(KEY_ACTIVE_ROW, serde_json::to_string(&saved.active_row)?);
        self.store.sync()
    }

    /// Load the saved game, if a complete one exists
    ///
    /// Returns `None` when any field is absent or fails to parse.
    #[must_use]
    pub fn load(&self) -> Option<SavedGame> {
        let target_word: String = self.field(KEY_TARGET_WORD)?;
        let attempts: Vec<String> = self.field(KEY_ATTEMPTS)?;
        let attempt_count: usize = self.field(KEY_ATTEMPT_COUNT)?;
        let active_row: usize = self.field(KEY_ACTIVE_ROW)?;

        Some(SavedGame {
            target_word,
            attempts,
            attempt_count,
            active_row,
        })
    }

    /// Remove every persisted field
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing store cannot be written.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        for key in ALL_KEYS {
            self.store.remove(key);
        }
        self.store.sync()
    }

    fn field<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("Treating malformed save field {key:?} as no save: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SavedGame {
        SavedGame {
            target_word: "apple".to_string(),
            attempts: vec!["arise".to_string(), "pl".to_string()],
            attempt_count: 1,
            active_row: 1,
        }
    }

    #[test]
    fn save_load_round_trips_exactly() {
        let mut store = GameStore::new(MemoryStore::new());
        store.save(&sample()).unwrap();

        assert_eq!(store.load(), Some(sample()));
    }

    #[test]
    fn load_without_save_is_none() {
        let store = GameStore::new(MemoryStore::new());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_after_clear_is_none() {
        let mut store = GameStore::new(MemoryStore::new());
        store.save(&sample()).unwrap();
        store.clear().unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_overwrites_prior_value() {
        let mut store = GameStore::new(MemoryStore::new());
        store.save(&sample()).unwrap();

        let mut updated = sample();
        updated.attempts.push("apple".to_string());
        updated.attempt_count = 2;
        store.save(&updated).unwrap();

        assert_eq!(store.load(), Some(updated));
    }

    #[test]
    fn load_with_missing_field_is_none() {
        let mut inner = MemoryStore::new();
        inner.set(super::KEY_TARGET_WORD, "\"apple\"".to_string());
        inner.set(super::KEY_ATTEMPTS, "[]".to_string());
        // attempt_count and active_row absent

        let store = GameStore::new(inner);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_with_wrong_shape_is_none() {
        // One field carries the wrong type
        let mut inner = MemoryStore::new();
        inner.set(super::KEY_TARGET_WORD, "\"apple\"".to_string());
        inner.set(super::KEY_ATTEMPTS, "\"not-a-list\"".to_string());
        inner.set(super::KEY_ATTEMPT_COUNT, "1".to_string());
        inner.set(super::KEY_ACTIVE_ROW, "1".to_string());

        let broken = GameStore::new(inner);
        assert_eq!(broken.load(), None);
    }

    #[test]
    fn file_backed_store_survives_reopen() {
        let path = std::env::temp_dir().join("wordle_game_store_reopen.json");
        std::fs::remove_file(&path).ok();

        let mut store = GameStore::new(JsonFileStore::open(&path));
        store.save(&sample()).unwrap();
        drop(store);

        let reopened = GameStore::new(JsonFileStore::open(&path));
        assert_eq!(reopened.load(), Some(sample()));

        std::fs::remove_file(&path).ok();
    }
}

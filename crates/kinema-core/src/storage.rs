use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::KinemaError;
use crate::models::WatchedList;

const SCHEMA: &str = include_str!("../../../migrations/001_initial.sql");

/// SQLite-backed key-value storage for persisted app state.
///
/// The watched collection lives as a single JSON document under the
/// key named by `StorageConfig::watched_key`, so renaming the key in
/// config starts a fresh collection without touching the old one.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open (or create) the database at the given path and run migrations.
    pub fn open(path: &Path) -> Result<Self, KinemaError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, KinemaError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Read the raw value stored under a key.
    pub fn get(&self, key: &str) -> Result<Option<String>, KinemaError> {
        self.conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Write a value under a key, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), KinemaError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete the value stored under a key.
    pub fn delete(&self, key: &str) -> Result<(), KinemaError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Load the watched collection stored under `key`.
    ///
    /// A missing key yields an empty collection; a corrupt document is
    /// a serialization error.
    pub fn load_list(&self, key: &str) -> Result<WatchedList, KinemaError> {
        match self.get(key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(WatchedList::new()),
        }
    }

    /// Persist the watched collection under `key`.
    pub fn save_list(&self, key: &str, list: &WatchedList) -> Result<(), KinemaError> {
        let json = serde_json::to_string(list)?;
        self.set(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WatchedEntry;
    use chrono::Utc;

    fn entry(id: &str) -> WatchedEntry {
        WatchedEntry {
            imdb_id: id.into(),
            title: "Interstellar".into(),
            year: "2014".into(),
            poster_url: Some("https://example.com/poster.jpg".into()),
            imdb_rating: 8.7,
            runtime_minutes: 169,
            user_rating: 10,
            rating_change_count: 2,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_missing_key_is_empty_list() {
        let db = Storage::open_memory().unwrap();
        let list = db.load_list("watched").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let db = Storage::open_memory().unwrap();

        let mut list = WatchedList::new();
        list.add(entry("tt0816692"));
        db.save_list("watched", &list).unwrap();

        let loaded = db.load_list("watched").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.rating_for("tt0816692"), Some(10));
        assert_eq!(loaded.entries()[0].rating_change_count, 2);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kinema.db");

        {
            let db = Storage::open(&path).unwrap();
            let mut list = WatchedList::new();
            list.add(entry("tt0816692"));
            db.save_list("watched", &list).unwrap();
        }

        let db = Storage::open(&path).unwrap();
        let loaded = db.load_list("watched").unwrap();
        assert!(loaded.contains("tt0816692"));
    }

    #[test]
    fn test_keys_are_independent() {
        let db = Storage::open_memory().unwrap();

        let mut list = WatchedList::new();
        list.add(entry("tt0816692"));
        db.save_list("watched", &list).unwrap();

        let other = db.load_list("watched-v2").unwrap();
        assert!(other.is_empty());
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let db = Storage::open_memory().unwrap();

        let mut list = WatchedList::new();
        list.add(entry("tt0816692"));
        db.save_list("watched", &list).unwrap();

        list.remove("tt0816692");
        db.save_list("watched", &list).unwrap();

        let loaded = db.load_list("watched").unwrap();
        assert!(loaded.is_empty());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rated title in the user's watched collection.
///
/// Data is copied from the catalog at add time; later catalog changes do
/// not affect stored entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    /// External catalog identifier (IMDb id), unique within the collection.
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    /// Critic rating as published by the catalog at add time.
    pub imdb_rating: f32,
    /// Runtime parsed from the raw catalog string ("127 min" -> 127).
    pub runtime_minutes: u32,
    /// The user's own rating, 1-10.
    pub user_rating: u8,
    /// How many times the user changed their mind before confirming.
    pub rating_change_count: u32,
    pub added_at: DateTime<Utc>,
}

/// The ordered watched collection. Insertion order is add order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchedList {
    entries: Vec<WatchedEntry>,
}

impl WatchedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.entries.iter().any(|e| e.imdb_id == imdb_id)
    }

    /// The stored user rating for a title, if it is in the collection.
    pub fn rating_for(&self, imdb_id: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.imdb_id == imdb_id)
            .map(|e| e.user_rating)
    }

    /// Append an entry. Refuses a duplicate id and returns `false`;
    /// uniqueness is an invariant of the collection, not just a UI guard.
    pub fn add(&mut self, entry: WatchedEntry) -> bool {
        if self.contains(&entry.imdb_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Drop every entry with the given id. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, imdb_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.imdb_id != imdb_id);
        self.entries.len() != before
    }
}

impl FromIterator<WatchedEntry> for WatchedList {
    fn from_iter<I: IntoIterator<Item = WatchedEntry>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.add(entry);
        }
        list
    }
}

/// Parse a raw catalog runtime string such as `"127 min"` into minutes.
///
/// Returns `None` for missing or unparseable values (the catalog uses
/// `"N/A"` for titles without runtime data).
pub fn parse_runtime_minutes(raw: &str) -> Option<u32> {
    raw.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, rating: u8) -> WatchedEntry {
        WatchedEntry {
            imdb_id: id.into(),
            title: "Inception".into(),
            year: "2010".into(),
            poster_url: None,
            imdb_rating: 8.8,
            runtime_minutes: 148,
            user_rating: rating,
            rating_change_count: 0,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut list = WatchedList::new();
        assert!(list.add(entry("tt1375666", 9)));
        assert!(!list.add(entry("tt1375666", 7)));

        assert_eq!(list.len(), 1);
        assert_eq!(list.rating_for("tt1375666"), Some(9));
    }

    #[test]
    fn test_remove_filters_all_matches() {
        let mut list = WatchedList::new();
        list.add(entry("tt0111161", 10));
        list.add(entry("tt0068646", 9));

        list.remove("tt0111161");
        assert_eq!(list.len(), 1);
        assert!(!list.contains("tt0111161"));
        assert!(list.contains("tt0068646"));

        // Removing an absent id is a no-op.
        list.remove("tt9999999");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut list = WatchedList::new();
        list.add(entry("a", 1));
        list.add(entry("b", 2));
        list.add(entry("c", 3));

        let ids: Vec<_> = list.entries().iter().map(|e| e.imdb_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_parse_runtime_minutes() {
        assert_eq!(parse_runtime_minutes("127 min"), Some(127));
        assert_eq!(parse_runtime_minutes("90 min"), Some(90));
        assert_eq!(parse_runtime_minutes("N/A"), None);
        assert_eq!(parse_runtime_minutes(""), None);
        assert_eq!(parse_runtime_minutes("min 127"), None);
    }
}

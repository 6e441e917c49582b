use crate::models::WatchedEntry;

/// Aggregate statistics over the watched collection.
///
/// All averages are arithmetic means over every entry; an empty
/// collection yields zeros rather than NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WatchedStats {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime_minutes: f64,
}

impl WatchedStats {
    pub fn from_entries(entries: &[WatchedEntry]) -> Self {
        if entries.is_empty() {
            return Self::default();
        }
        let n = entries.len() as f64;
        Self {
            count: entries.len(),
            avg_imdb_rating: entries.iter().map(|e| e.imdb_rating as f64).sum::<f64>() / n,
            avg_user_rating: entries.iter().map(|e| e.user_rating as f64).sum::<f64>() / n,
            avg_runtime_minutes: entries
                .iter()
                .map(|e| e.runtime_minutes as f64)
                .sum::<f64>()
                / n,
        }
    }
}

/// Total minutes across the whole collection, for the watch-time figure.
pub fn total_runtime_minutes(entries: &[WatchedEntry]) -> u64 {
    entries.iter().map(|e| e.runtime_minutes as u64).sum()
}

/// How many entries carry each user rating, indexed by rating 1..=10.
///
/// `distribution[0]` is the count of 1-star entries.
pub fn rating_distribution(entries: &[WatchedEntry]) -> [usize; 10] {
    let mut buckets = [0usize; 10];
    for entry in entries {
        let rating = entry.user_rating.clamp(1, 10) as usize;
        buckets[rating - 1] += 1;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(imdb: f32, user: u8, runtime: u32) -> WatchedEntry {
        WatchedEntry {
            imdb_id: format!("tt{user}{runtime}"),
            title: "Test".into(),
            year: "2020".into(),
            poster_url: None,
            imdb_rating: imdb,
            runtime_minutes: runtime,
            user_rating: user,
            rating_change_count: 0,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_collection_yields_zeros() {
        let stats = WatchedStats::from_entries(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.avg_imdb_rating, 0.0);
        assert_eq!(stats.avg_user_rating, 0.0);
        assert_eq!(stats.avg_runtime_minutes, 0.0);
    }

    #[test]
    fn test_means_over_all_entries() {
        let entries = [entry(8.0, 9, 100), entry(7.0, 7, 90), entry(9.0, 8, 120)];
        let stats = WatchedStats::from_entries(&entries);

        assert_eq!(stats.count, 3);
        assert!((stats.avg_imdb_rating - 8.0).abs() < 1e-9);
        assert!((stats.avg_user_rating - 8.0).abs() < 1e-9);
        // 310 / 3 = 103.333...
        assert!((stats.avg_runtime_minutes - 103.333_333_333).abs() < 1e-6);
    }

    #[test]
    fn test_total_runtime() {
        let entries = [entry(8.0, 9, 100), entry(7.0, 7, 90)];
        assert_eq!(total_runtime_minutes(&entries), 190);
    }

    #[test]
    fn test_rating_distribution() {
        let entries = [entry(8.0, 9, 100), entry(7.0, 9, 90), entry(9.0, 1, 120)];
        let dist = rating_distribution(&entries);
        assert_eq!(dist[8], 2); // two 9s
        assert_eq!(dist[0], 1); // one 1
        assert_eq!(dist.iter().sum::<usize>(), 3);
    }
}

use std::collections::HashMap;
use std::path::PathBuf;

/// State of a poster image for a given movie.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory cache mapping IMDb IDs to their poster image state.
#[derive(Debug, Default)]
pub struct PosterCache {
    pub states: HashMap<String, PosterState>,
}

impl PosterCache {
    pub fn get(&self, imdb_id: &str) -> Option<&PosterState> {
        self.states.get(imdb_id)
    }

    /// Whether a download should be dispatched for this id.
    ///
    /// A `Failed` entry stays fetchable: a search hit without a poster
    /// URL is marked failed, and the detail response may later carry a
    /// real URL for the same title.
    pub fn needs_fetch(&self, imdb_id: &str) -> bool {
        matches!(self.states.get(imdb_id), None | Some(PosterState::Failed))
    }
}

/// Directory for cached poster images.
pub fn posters_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "kinema")
        .map(|dirs| dirs.data_dir().join("posters"))
        .unwrap_or_else(|| PathBuf::from("posters"))
}

/// Expected file path for a poster image.
pub fn poster_path(imdb_id: &str) -> PathBuf {
    posters_dir().join(format!("{imdb_id}.jpg"))
}

/// Download a poster image and save it to disk. Returns the saved path.
pub async fn fetch_poster(imdb_id: String, url: String) -> Result<PathBuf, String> {
    let dir = posters_dir();
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

    let path = poster_path(&imdb_id);

    let bytes = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;

    std::fs::write(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_poster_is_retried_when_a_url_appears() {
        let mut cache = PosterCache::default();
        assert!(cache.needs_fetch("tt1375666"));

        // A search hit with no poster URL gets marked failed; the
        // detail response for the same title may carry a real URL.
        cache
            .states
            .insert("tt1375666".into(), PosterState::Failed);
        assert!(cache.needs_fetch("tt1375666"));

        cache
            .states
            .insert("tt1375666".into(), PosterState::Loading);
        assert!(!cache.needs_fetch("tt1375666"));

        cache
            .states
            .insert("tt1375666".into(), PosterState::Loaded(PathBuf::from("p.jpg")));
        assert!(!cache.needs_fetch("tt1375666"));
    }
}

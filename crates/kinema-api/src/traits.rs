//! Trait definitions for movie catalog providers.
//!
//! The client crate implements these against a concrete provider so the
//! UI never depends on a specific wire format.

use std::future::Future;

/// A unified movie catalog interface.
pub trait MovieCatalog: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search for movies matching a title query.
    fn search_movies(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, Self::Error>> + Send;

    /// Fetch full details for a single title by its catalog id.
    fn lookup_movie(
        &self,
        imdb_id: &str,
    ) -> impl Future<Output = Result<MovieDetail, Self::Error>> + Send;
}

/// A single search hit. Enough for a result list row, nothing more.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
}

/// Full details for one title.
///
/// String fields the provider marks as unavailable arrive as `None`;
/// `runtime` stays raw ("148 min") so callers decide how to parse it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub released: Option<String>,
    pub imdb_rating: Option<f32>,
}

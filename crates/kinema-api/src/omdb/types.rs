use serde::Deserialize;

use crate::traits::{MovieDetail, MovieSummary};

// ── Search responses ────────────────────────────────────────────

/// Envelope for `?s=` search queries.
///
/// OMDb signals failure in-band: `Response: "False"` plus an `Error`
/// string, with HTTP 200. The hit list is absent on failure.
#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search")]
    pub search: Option<Vec<OmdbSearchHit>>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OmdbSearchHit {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

// ── Detail responses ────────────────────────────────────────────

/// Envelope for `?i=` lookups. Same in-band error convention.
#[derive(Debug, Deserialize)]
pub struct OmdbDetailResponse {
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

// ── Conversions to shared trait types ───────────────────────────

/// OMDb never omits fields, it sends the literal string "N/A" instead.
fn non_na(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "N/A" && !v.is_empty())
}

impl OmdbSearchHit {
    pub fn into_summary(self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster_url: non_na(self.poster),
        }
    }
}

impl OmdbDetailResponse {
    pub fn into_detail(self) -> MovieDetail {
        MovieDetail {
            imdb_id: self.imdb_id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            poster_url: non_na(self.poster),
            runtime: non_na(self.runtime),
            genre: non_na(self.genre),
            director: non_na(self.director),
            actors: non_na(self.actors),
            plot: non_na(self.plot),
            released: non_na(self.released),
            imdb_rating: non_na(self.imdb_rating).and_then(|r| r.parse().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let json = r#"{
            "Search": [
                {
                    "Title": "Inception",
                    "Year": "2010",
                    "imdbID": "tt1375666",
                    "Type": "movie",
                    "Poster": "https://m.media-amazon.com/images/M/inception.jpg"
                },
                {
                    "Title": "Inception: The Cobol Job",
                    "Year": "2010",
                    "imdbID": "tt5295990",
                    "Type": "movie",
                    "Poster": "N/A"
                }
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let resp: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response, "True");
        let hits = resp.search.unwrap();
        assert_eq!(hits.len(), 2);

        let first = hits.into_iter().next().unwrap().into_summary();
        assert_eq!(first.imdb_id, "tt1375666");
        assert_eq!(first.title, "Inception");
        assert!(first.poster_url.is_some());
    }

    #[test]
    fn test_deserialize_search_failure() {
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let resp: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response, "False");
        assert_eq!(resp.error.as_deref(), Some("Movie not found!"));
        assert!(resp.search.is_none());
    }

    #[test]
    fn test_deserialize_detail_response() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Released": "16 Jul 2010",
            "Runtime": "148 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Plot": "A thief who steals corporate secrets...",
            "Poster": "https://m.media-amazon.com/images/M/inception.jpg",
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Response": "True"
        }"#;

        let detail: OmdbDetailResponse = serde_json::from_str(json).unwrap();
        let detail = detail.into_detail();
        assert_eq!(detail.imdb_id, "tt1375666");
        assert_eq!(detail.runtime.as_deref(), Some("148 min"));
        assert_eq!(detail.imdb_rating, Some(8.8));
        assert_eq!(detail.director.as_deref(), Some("Christopher Nolan"));
    }

    #[test]
    fn test_na_fields_become_none() {
        let json = r#"{
            "Title": "Obscure Short",
            "Year": "1998",
            "Runtime": "N/A",
            "Poster": "N/A",
            "Director": "N/A",
            "imdbRating": "N/A",
            "imdbID": "tt0000001",
            "Response": "True"
        }"#;

        let detail: OmdbDetailResponse = serde_json::from_str(json).unwrap();
        let detail = detail.into_detail();
        assert!(detail.runtime.is_none());
        assert!(detail.poster_url.is_none());
        assert!(detail.director.is_none());
        assert!(detail.imdb_rating.is_none());
    }
}

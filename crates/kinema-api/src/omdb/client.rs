use reqwest::Client;

use super::error::OmdbError;
use super::types::{OmdbDetailResponse, OmdbSearchResponse};
use crate::traits::{MovieCatalog, MovieDetail, MovieSummary};

/// OMDb REST client.
///
/// OMDb reports "not found" in the JSON body with HTTP 200, so
/// [`OmdbError::NoResults`] comes from the payload, never the status.
#[derive(Clone)]
pub struct OmdbClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OmdbClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            http: Client::new(),
        }
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, OmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "OMDb API error");
            Err(OmdbError::Api {
                status,
                message: body,
            })
        }
    }
}

impl MovieCatalog for OmdbClient {
    type Error = OmdbError;

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let search: OmdbSearchResponse = resp
            .json()
            .await
            .map_err(|e| OmdbError::Parse(e.to_string()))?;

        if search.response != "True" {
            let message = search.error.unwrap_or_else(|| "Movie not found!".into());
            return Err(OmdbError::NoResults(message));
        }

        Ok(search
            .search
            .unwrap_or_default()
            .into_iter()
            .map(|hit| hit.into_summary())
            .collect())
    }

    async fn lookup_movie(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("i", imdb_id)])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let detail: OmdbDetailResponse = resp
            .json()
            .await
            .map_err(|e| OmdbError::Parse(e.to_string()))?;

        if detail.response != "True" {
            let message = detail.error.unwrap_or_else(|| "Movie not found!".into());
            return Err(OmdbError::NoResults(message));
        }

        Ok(detail.into_detail())
    }
}

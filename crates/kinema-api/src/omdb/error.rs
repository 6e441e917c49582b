use thiserror::Error;

/// Errors from the OMDb API client.
#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The provider answered but found nothing for the query.
    #[error("no results: {0}")]
    NoResults(String),

    #[error("parse error: {0}")]
    Parse(String),
}

//! OMDb API client (<https://www.omdbapi.com>).

mod client;
mod error;
mod types;

pub use client::OmdbClient;
pub use error::OmdbError;

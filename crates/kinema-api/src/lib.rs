//! Remote movie catalog clients.
//!
//! The shared [`traits::MovieCatalog`] interface keeps the UI
//! provider-agnostic; the [`omdb`] module implements it against the
//! OMDb REST API.

pub mod omdb;
pub mod traits;

pub use traits::{MovieCatalog, MovieDetail, MovieSummary};

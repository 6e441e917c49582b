//! Domain layer for the kinema watchlist application.
//!
//! Holds the persisted models (the watched collection), summary
//! statistics, the SQLite-backed key-value storage, and configuration.
//! Everything network- or UI-facing lives in the `kinema-api` and
//! `kinema-gui` crates.

pub mod config;
pub mod error;
pub mod models;
pub mod stats;
pub mod storage;

pub use error::KinemaError;

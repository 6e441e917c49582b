use thiserror::Error;

#[derive(Debug, Error)]
pub enum KinemaError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("config error: {0}")]
    Config(String),

    /// A background storage worker is gone and can no longer answer.
    #[error("storage worker unavailable: {0}")]
    Worker(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

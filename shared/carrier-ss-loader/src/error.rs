//! Error types for carrier document loading

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoaderError>;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed carrier document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid carrier document: {0}")]
    Validation(String),
}

//! Error types for the supplementary-service codec

use thiserror::Error;

use crate::schema::Action;

/// Result type alias
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors surfaced by the codec.
///
/// Nothing here is fatal: a missing schema entry means "no such command"
/// and the caller must treat the requested operation as unavailable.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    #[error("feature {feature} has no {action} command")]
    UnknownCommand { feature: String, action: Action },

    #[error("invalid response pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

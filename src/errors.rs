use thiserror::Error;
use uuid::Uuid;

/// Error type covering the tracker core and its collaborator seams.
///
/// Core functions fail fast to their immediate caller; recovery and
/// user-facing messaging belong to the presentation layer.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid exchange rate: {0}")]
    InvalidRate(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("subscription not found: {0}")]
    NotFound(Uuid),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("mood must be between 1 and 5, got {0}")]
    InvalidMood(u8),
}

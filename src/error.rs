//! Error types for decoding wire models.

use thiserror::Error;

/// Why a wire object could not be decoded.
///
/// Every variant means the same thing to a caller: the record is unusable.
/// The variants only exist so the reason can be logged or reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid type for field {field}: expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Expected a JSON object")]
    NotAnObject,

    #[error("Invalid endpoint: {0}")]
    Endpoint(Box<DecodeError>),

    #[error("Malformed JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Json(e.to_string())
    }
}

/// Result type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

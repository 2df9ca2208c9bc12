use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    /// Signature mismatch, or a token that cannot be parsed at all.
    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}

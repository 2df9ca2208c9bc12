use auth::JwtError;
use thiserror::Error;

use crate::user::errors::EmailError;
use crate::user::errors::UserError;

/// Error for blacklist persistence
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlacklistError {
    #[error("Token is already blacklisted")]
    AlreadyBlacklisted,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Errors of the authentication session lifecycle.
///
/// The display text of the client-facing variants is what the HTTP layer
/// sends back. `StoreError` and `Internal` carry diagnostic detail that is
/// only ever logged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists. Please Log in.")]
    AlreadyRegistered,

    #[error("User does not exist.")]
    UserNotFound,

    #[error("Signature expired. Please log in again.")]
    ExpiredToken,

    #[error("Invalid token. Please log in again.")]
    InvalidSignature,

    #[error("Token blacklisted. Please log in again.")]
    Blacklisted,

    #[error("Provide a valid auth token.")]
    MissingToken,

    #[error("Bearer token malformed.")]
    MalformedHeader,

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Infrastructure errors
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// True for failures of the service itself rather than of the caller.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, AuthError::StoreError(_) | AuthError::Internal(_))
    }
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(_) => AuthError::AlreadyRegistered,
            UserError::InvalidEmail(e) => AuthError::StoreError(format!("Stored email is invalid: {}", e)),
            UserError::DatabaseError(msg) => AuthError::StoreError(msg),
        }
    }
}

impl From<BlacklistError> for AuthError {
    fn from(err: BlacklistError) -> Self {
        match err {
            BlacklistError::AlreadyBlacklisted => AuthError::Blacklisted,
            BlacklistError::DatabaseError(msg) => AuthError::StoreError(msg),
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => AuthError::ExpiredToken,
            JwtError::InvalidToken(_) => AuthError::InvalidSignature,
            JwtError::EncodingFailed(msg) => AuthError::Internal(msg),
        }
    }
}

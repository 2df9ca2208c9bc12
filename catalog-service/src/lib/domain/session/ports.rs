use async_trait::async_trait;

use crate::domain::session::errors::AuthError;
use crate::domain::session::errors::BlacklistError;
use crate::domain::session::models::BlacklistedToken;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::RegisterCommand;
use crate::domain::session::models::UserView;
use crate::domain::user::models::UserId;

/// Port for the authentication session lifecycle.
///
/// A token is issued by `register`/`login`, accepted by `validate` while it
/// is unexpired and not blacklisted, and retired by `logout`.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create an account and issue its first token.
    ///
    /// # Errors
    /// * `AlreadyRegistered` - Email is already registered
    /// * `StoreError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<String, AuthError>;

    /// Check credentials and issue a fresh token.
    ///
    /// # Errors
    /// * `UserNotFound` - Unknown email or wrong password (indistinguishable)
    /// * `StoreError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Resolve a presented token to the user it was issued for.
    ///
    /// # Errors
    /// * `ExpiredToken` - Token is past its validity window
    /// * `InvalidSignature` - Token is forged, tampered or malformed
    /// * `Blacklisted` - Token was retired by logout
    /// * `StoreError` - Blacklist lookup failed
    async fn validate(&self, token: &str) -> Result<UserId, AuthError>;

    /// Retire a token so it is rejected from now on.
    ///
    /// # Errors
    /// Same as `validate`; logging out twice reports `Blacklisted`.
    async fn logout(&self, token: &str) -> Result<(), AuthError>;

    /// Public view of the user owning a token.
    ///
    /// # Errors
    /// Same as `validate`, plus `UserNotFound` when the user row is gone.
    async fn who_am_i(&self, token: &str) -> Result<UserView, AuthError>;
}

/// Persistence of invalidated tokens.
#[async_trait]
pub trait BlacklistRepository: Send + Sync + 'static {
    /// Record a token as invalidated.
    ///
    /// # Errors
    /// * `AlreadyBlacklisted` - Token is already recorded (uniqueness constraint)
    /// * `DatabaseError` - Database operation failed
    async fn add(&self, token: &str) -> Result<BlacklistedToken, BlacklistError>;

    /// Check whether a token has been invalidated.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn contains(&self, token: &str) -> Result<bool, BlacklistError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::session::errors::AuthError;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::RegisterCommand;
use crate::domain::session::models::UserView;
use crate::domain::session::ports::AuthServicePort;
use crate::domain::session::ports::BlacklistRepository;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UserId;
use crate::user::ports::UserRepository;

/// Domain service implementation for the authentication session lifecycle.
///
/// Holds no per-session state: every validation reads the blacklist afresh,
/// so a logout is visible to concurrent requests immediately.
pub struct AuthService<UR, BR>
where
    UR: UserRepository,
    BR: BlacklistRepository,
{
    users: Arc<UR>,
    blacklist: Arc<BR>,
    authenticator: Arc<Authenticator>,
}

impl<UR, BR> AuthService<UR, BR>
where
    UR: UserRepository,
    BR: BlacklistRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `blacklist` - Blacklisted token persistence implementation
    /// * `authenticator` - Password hashing and token signing
    pub fn new(users: Arc<UR>, blacklist: Arc<BR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            blacklist,
            authenticator,
        }
    }

    // Argon2 is CPU bound; keep it off the async workers.
    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

#[async_trait]
impl<UR, BR> AuthServicePort for AuthService<UR, BR>
where
    UR: UserRepository,
    BR: BlacklistRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<String, AuthError> {
        if self
            .users
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::AlreadyRegistered);
        }

        let password_hash = self.hash_password(command.password).await?;

        // A concurrent registration of the same email surfaces here as a
        // uniqueness violation, mapped to AlreadyRegistered.
        let user = self
            .users
            .create(NewUser {
                email: command.email,
                password_hash,
                admin: false,
                registered_on: Utc::now(),
            })
            .await?;

        let token = self.authenticator.generate_token(user.id, Utc::now())?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(token)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        let user = self
            .users
            .find_by_email(&command.email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.password_hash.clone();
        let user_id = user.id;

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&command.password, &stored_hash, user_id, Utc::now())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {}", e)))?;

        match result {
            Ok(authenticated) => {
                tracing::info!(user_id = %user_id, "User logged in");
                Ok(authenticated.access_token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(user_id = %user_id, "Login rejected: wrong password");
                Err(AuthError::UserNotFound)
            }
            Err(AuthenticationError::PasswordError(e)) => Err(AuthError::Internal(e.to_string())),
            Err(AuthenticationError::JwtError(e)) => Err(e.into()),
        }
    }

    async fn validate(&self, token: &str) -> Result<UserId, AuthError> {
        let claims = self.authenticator.validate_token(token)?;

        let user_id = UserId::from_subject(claims.subject()).ok_or(AuthError::InvalidSignature)?;

        if self.blacklist.contains(token).await? {
            return Err(AuthError::Blacklisted);
        }

        Ok(user_id)
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let user_id = self.validate(token).await?;

        self.blacklist.add(token).await?;

        tracing::info!(user_id = %user_id, "User logged out");

        Ok(())
    }

    async fn who_am_i(&self, token: &str) -> Result<UserView, AuthError> {
        let user_id = self.validate(token).await?;

        self.users
            .find_by_id(&user_id)
            .await?
            .map(|user| UserView::from(&user))
            .ok_or(AuthError::UserNotFound)
    }
}

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::HashingCost;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Built once at startup from process configuration and shared by reference.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `token_validity` - Lifetime of every issued token
    /// * `hashing_cost` - Work factor for password hashing
    ///
    /// # Errors
    /// * `InvalidParameters` - Hashing cost rejected
    pub fn new(
        jwt_secret: &[u8],
        token_validity: Duration,
        hashing_cost: HashingCost,
    ) -> Result<Self, PasswordError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(hashing_cost)?,
            jwt_handler: JwtHandler::new(jwt_secret, token_validity),
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and mint a token for `subject`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
        issued_at: DateTime<Utc>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.encode(subject, issued_at)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Mint a token without password verification.
    ///
    /// Used right after registration, when the caller has just proven
    /// knowledge of the password by choosing it.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token(
        &self,
        subject: impl ToString,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        self.jwt_handler.encode(subject, issued_at)
    }

    /// Validate and decode a token against the current time.
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its expiration
    /// * `InvalidToken` - Signature or structure is invalid
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(
            b"test_secret_key_at_least_32_bytes!",
            Duration::hours(120),
            HashingCost {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
        )
        .expect("Failed to build authenticator")
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, 123, Utc::now())
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.subject(), "123");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, 123, Utc::now());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_generate_and_validate_token() {
        let authenticator = authenticator();
        let issued_at = Utc::now();

        let token = authenticator
            .generate_token(5, issued_at)
            .expect("Failed to generate token");

        let decoded = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");
        assert_eq!(decoded.subject(), "5");
        assert_eq!(decoded.exp - decoded.iat, Duration::hours(120).num_seconds());
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        let result = authenticator.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }
}

//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the catalog service:
//! - Password hashing (Argon2id, configurable cost)
//! - Signed, expiring JWT access tokens
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{HashingCost, PasswordHasher};
//!
//! let hasher = PasswordHasher::new(HashingCost::default()).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::days(5));
//! let token = handler.encode(42, Utc::now()).unwrap();
//! let claims = handler.decode(&token).unwrap();
//! assert_eq!(claims.subject(), "42");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashingCost;
pub use password::PasswordError;
pub use password::PasswordHasher;

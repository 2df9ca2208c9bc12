use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Command to register a new account
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterCommand {
    /// # Arguments
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

/// Command to log in with existing credentials.
///
/// The email is not validated: an address that could never have been
/// registered simply does not match any user.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Public projection of a user, safe to return to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub id: UserId,
    pub email: String,
    pub admin: bool,
    pub registered_on: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_string(),
            admin: user.admin,
            registered_on: user.registered_on,
        }
    }
}

/// A token that was explicitly invalidated by logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistedToken {
    pub id: i64,
    pub token: String,
    pub blacklisted_on: DateTime<Utc>,
}

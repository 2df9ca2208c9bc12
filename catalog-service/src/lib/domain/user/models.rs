use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::EmailError;

/// User aggregate entity.
///
/// Represents a registered account. Rows are never mutated after creation.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub admin: bool,
    pub registered_on: DateTime<Utc>,
}

/// User unique identifier type, assigned by storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from a token subject.
    ///
    /// # Returns
    /// Parsed UserId, or None when the subject is not an integer
    pub fn from_subject(subject: &str) -> Option<Self> {
        subject.parse().ok().map(UserId)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `TooLong` - Email exceeds 255 characters
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let length = email.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User row about to be inserted; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password_hash: String,
    pub admin: bool,
    pub registered_on: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address_valid() {
        let email = EmailAddress::new("a@x.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn test_email_address_invalid() {
        for raw in ["", "not-an-email", "@x.com", "a@"] {
            assert!(
                EmailAddress::new(raw.to_string()).is_err(),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_email_address_too_long() {
        let email = format!("{}@example.com", "a".repeat(250));

        assert_eq!(
            EmailAddress::new(email),
            Err(EmailError::TooLong {
                max: 255,
                actual: 262,
            })
        );
    }

    #[test]
    fn test_user_id_from_subject() {
        assert_eq!(UserId::from_subject("42"), Some(UserId(42)));
        assert_eq!(UserId::from_subject("abc"), None);
        assert_eq!(UserId::from_subject(""), None);
    }
}

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// The registered RFC 7519 claims needed for a bearer session, plus the issue
/// time at microsecond precision so two tokens minted for the same subject
/// within one second still differ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Issued at (Unix timestamp in microseconds)
    pub iat_us: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject whose validity window starts at `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Identifier the token is bound to
    /// * `issued_at` - Start of the validity window
    /// * `validity` - Length of the validity window
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>, validity: Duration) -> Self {
        let expires_at = issued_at + validity;

        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            iat_us: issued_at.timestamp_micros(),
            exp: expires_at.timestamp(),
        }
    }

    /// Subject the token was minted for.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Check if token is expired.
    ///
    /// A token is still valid at exactly its expiration second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler for minting and checking access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Every token it mints carries the same
/// validity window, counted from the issue time supplied by the caller.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `validity` - How long a minted token stays valid
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Changing the secret invalidates every token issued with the old one
    pub fn new(secret: &[u8], validity: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity,
        }
    }

    /// Mint a token bound to `subject`, valid from `issued_at`.
    ///
    /// The output is fully determined by the secret, the subject and the
    /// issue time.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, subject: impl ToString, issued_at: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, issued_at, self.validity);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token against the current time.
    ///
    /// # Errors
    /// * `TokenExpired` - Token expiration is in the past
    /// * `InvalidToken` - Signature mismatch or malformed token
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        self.decode_at(token, Utc::now())
    }

    /// Decode and validate a token as if the current time were `now`.
    ///
    /// Signature and structure are checked first; expiry is only reported for
    /// tokens that are otherwise genuine.
    ///
    /// # Errors
    /// * `TokenExpired` - `now` is past the token expiration
    /// * `InvalidToken` - Signature mismatch or malformed token
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is evaluated against `now` below, without leeway.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| JwtError::InvalidToken(e.to_string()))?
            .claims;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}

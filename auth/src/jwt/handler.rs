use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler for issuing and verifying access tokens.
///
/// Tokens are signed with HS256 (HMAC with SHA-256). Verification only accepts
/// HS256, so a token whose header names any other algorithm is rejected before
/// its signature is considered.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    token_ttl: Duration,
}

impl JwtHandler {
    /// Default token lifetime in hours.
    pub const DEFAULT_TTL_HOURS: i64 = 24;

    /// Create a new JWT handler with a secret key and the default 24h lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Errors
    /// * `SigningFailed` - Secret is empty
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        Self::with_ttl(secret, Duration::hours(Self::DEFAULT_TTL_HOURS))
    }

    /// Create a new JWT handler with an explicit token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Errors
    /// * `SigningFailed` - Secret is empty
    pub fn with_ttl(secret: &[u8], token_ttl: Duration) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::SigningFailed(
                "signing secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            token_ttl,
        })
    }

    /// Lifetime of tokens issued by this handler.
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Encode claims into a signed JWT token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }

    /// Issue an access token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Identifier embedded as the `user_id` claim
    ///
    /// # Returns
    /// Signed token expiring after the configured lifetime
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn issue(&self, user_id: i64) -> Result<String, JwtError> {
        self.encode(&Claims::for_user(user_id, self.token_ttl))
    }

    /// Verify a token and resolve the user it was issued for.
    ///
    /// # Arguments
    /// * `token` - JWT token string
    ///
    /// # Returns
    /// The `user_id` claim
    ///
    /// # Errors
    /// * `TokenExpired` - Expiration instant has been reached
    /// * `InvalidToken` - Bad signature, unexpected algorithm, malformed token,
    ///   missing or wrongly typed claims
    pub fn verify(&self, token: &str) -> Result<i64, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.algorithms = vec![self.algorithm];
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        if token_data.claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(token_data.claims.user_id)
    }
}

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried by an access token.
///
/// `user_id` is serialized as a plain JSON integer so it round-trips through
/// any standard JSON number representation for realistic id ranges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Authenticated user identifier
    pub user_id: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a user, expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Claims with user_id, exp and iat set
    pub fn for_user(user_id: i64, ttl: Duration) -> Self {
        Self::issued_at(user_id, Utc::now(), ttl)
    }

    /// Create claims for a user as if issued at `now`.
    pub fn issued_at(user_id: i64, now: DateTime<Utc>, ttl: Duration) -> Self {
        let expiration = now + ttl;

        Self {
            user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Check if token is expired.
    ///
    /// A token is only valid strictly before its expiration instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user(42, Duration::hours(24));

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60); // 24 hours
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            user_id: 1,
            exp: 1000,
            iat: 0,
        };

        assert!(!claims.is_expired(999)); // Not expired
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }

    #[test]
    fn test_user_id_serializes_as_integer() {
        let claims = Claims {
            user_id: 9_007_199_254_740_991,
            exp: 2000,
            iat: 1000,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json["user_id"].is_i64());
        assert_eq!(json["user_id"].as_i64(), Some(9_007_199_254_740_991));

        let decoded: Claims = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, claims);
    }
}

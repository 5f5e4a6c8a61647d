//! Claims carried inside the signed access credential.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Access credential claims. Every field is required; a token missing any
/// of them, or carrying an ill-typed value, fails deserialization and is
/// rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Session identity, supplied by the caller at issuance.
    pub sub: Uuid,
    /// Requestor network address at issuance time.
    pub sub_ip: String,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    /// The refresh record this credential is bound to.
    pub refresh_token_id: Uuid,
}

impl SessionClaims {
    /// Build claims expiring `ttl` from now.
    #[must_use]
    pub fn new(user_id: Uuid, request_ip: &str, refresh_token_id: Uuid, ttl: Duration) -> Self {
        SessionClaims {
            sub: user_id,
            sub_ip: request_ip.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
            refresh_token_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let user_id = Uuid::new_v4();
        let record_id = Uuid::new_v4();
        let claims = SessionClaims::new(user_id, "127.0.0.1", record_id, Duration::from_secs(900));

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.sub_ip, "127.0.0.1");
        assert_eq!(claims.refresh_token_id, record_id);
        assert!(claims.exp > Utc::now().timestamp());
    }
}

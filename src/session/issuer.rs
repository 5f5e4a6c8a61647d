//! Issuance of bound access+refresh credential pairs.

use crate::error::AuthError;
use crate::jwt::{JwtCodec, SessionClaims};
use crate::metrics;
use crate::refresh::{hash_secret, RefreshSecret};
use crate::storage::RefreshStore;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// Creates fresh credential pairs: a signed access credential referencing
/// a newly persisted refresh record.
#[derive(Clone)]
pub struct TokenIssuer {
    store: Arc<dyn RefreshStore>,
    codec: Arc<JwtCodec>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer over the given store and codec.
    #[must_use]
    pub fn new(
        store: Arc<dyn RefreshStore>,
        codec: Arc<JwtCodec>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        TokenIssuer {
            store,
            codec,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issue a new pair for `user_id` bound to `request_ip`.
    ///
    /// The raw refresh secret is returned to the caller and not retained;
    /// only its salted digest is persisted.
    ///
    /// # Errors
    ///
    /// Randomness, hashing, storage, and signing failures are internal
    /// faults.
    pub async fn create_session(
        &self,
        user_id: Uuid,
        request_ip: &str,
    ) -> Result<(String, RefreshSecret), AuthError> {
        let secret = RefreshSecret::generate()?;
        let hash = hash_secret(&secret)?;

        let expires_at = Utc::now() + self.refresh_ttl;
        let record_id = self.store.create(hash, expires_at).await?;

        let claims = SessionClaims::new(user_id, request_ip, record_id, self.access_ttl);
        let access = self.codec.encode(&claims)?;

        metrics::SESSIONS_ISSUED.inc();
        info!(user_id = %user_id, refresh_record = %record_id, "issued session credential pair");

        Ok((access, secret))
    }
}

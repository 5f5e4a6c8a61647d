//! Session issuance and rotation.

pub mod alert;
pub mod issuer;
pub mod rotator;

pub use issuer::TokenIssuer;
pub use rotator::SessionRotator;

use crate::config::Config;
use crate::error::AuthError;
use crate::jwt::JwtCodec;
use crate::notify::{Notifier, WebhookNotifier};
use crate::refresh::RefreshSecret;
use crate::storage::{RedisRefreshStore, RefreshStore};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Issuance and rotation behind one seam. This is the object a transport
/// layer holds.
pub struct SessionTokenService {
    issuer: TokenIssuer,
    rotator: SessionRotator,
}

impl SessionTokenService {
    /// Assemble the service from explicit parts.
    #[must_use]
    pub fn new(
        store: Arc<dyn RefreshStore>,
        notifier: Arc<dyn Notifier>,
        signing_key: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        let codec = Arc::new(JwtCodec::new(signing_key));
        let issuer = TokenIssuer::new(Arc::clone(&store), Arc::clone(&codec), access_ttl, refresh_ttl);
        let rotator = SessionRotator::new(store, notifier, codec, issuer.clone());
        SessionTokenService { issuer, rotator }
    }

    /// Wire the durable adapters (Redis store, webhook notifier) from
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the Redis connection cannot be
    /// established.
    pub async fn from_config(config: &Config) -> Result<Self, AuthError> {
        let store: Arc<dyn RefreshStore> =
            Arc::new(RedisRefreshStore::new(&config.redis_url).await?);
        let notifier: Arc<dyn Notifier> =
            Arc::new(WebhookNotifier::new(config.alert_endpoint.clone()));

        Ok(Self::new(
            store,
            notifier,
            &config.signing_key,
            config.access_token_ttl,
            config.refresh_token_ttl,
        ))
    }

    /// Issue a fresh access credential and refresh secret for `user_id`.
    ///
    /// # Errors
    ///
    /// All failures here are internal faults.
    pub async fn create_session(
        &self,
        user_id: Uuid,
        request_ip: &str,
    ) -> Result<(String, RefreshSecret), AuthError> {
        self.issuer.create_session(user_id, request_ip).await
    }

    /// Exchange a valid credential pair for a new one, consuming the old
    /// refresh record.
    ///
    /// # Errors
    ///
    /// Any invalid-credential condition is `Unauthorized`; everything
    /// else is an internal fault.
    pub async fn refresh_access_token(
        &self,
        access_token: &str,
        presented_secret: &[u8],
        request_ip: &str,
    ) -> Result<(String, RefreshSecret), AuthError> {
        self.rotator
            .refresh_access_token(access_token, presented_secret, request_ip)
            .await
    }
}

//! Rotation of session credential pairs.
//!
//! The critical path — verify, look up, expiry check, digest comparison,
//! reissue — completes before a result is produced. Anomaly alerting and
//! retirement of the consumed record are detached tasks with log-only
//! error sinks.

use crate::error::AuthError;
use crate::jwt::JwtCodec;
use crate::metrics;
use crate::notify::Notifier;
use crate::refresh::{verify_secret, RefreshSecret};
use crate::session::alert::new_ip_alert;
use crate::session::issuer::TokenIssuer;
use crate::storage::RefreshStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Orchestrates the refresh flow: validates the presented pair, detects
/// anomalies, retires the old refresh record, and issues a new pair.
pub struct SessionRotator {
    store: Arc<dyn RefreshStore>,
    notifier: Arc<dyn Notifier>,
    codec: Arc<JwtCodec>,
    issuer: TokenIssuer,
}

impl SessionRotator {
    /// Create a rotator over the given collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn RefreshStore>,
        notifier: Arc<dyn Notifier>,
        codec: Arc<JwtCodec>,
        issuer: TokenIssuer,
    ) -> Self {
        SessionRotator {
            store,
            notifier,
            codec,
            issuer,
        }
    }

    /// Exchange a valid (access credential, refresh secret) pair for a new
    /// one. The consumed refresh record is single-use: no rotation may
    /// succeed twice against the same record.
    ///
    /// # Errors
    ///
    /// Every invalid-credential condition collapses to
    /// [`AuthError::Unauthorized`]; the remaining variants are internal
    /// faults.
    pub async fn refresh_access_token(
        &self,
        access_token: &str,
        presented_secret: &[u8],
        request_ip: &str,
    ) -> Result<(String, RefreshSecret), AuthError> {
        let result = self.rotate(access_token, presented_secret, request_ip).await;

        let status = match &result {
            Ok(_) => "success",
            Err(e) if e.is_unauthorized() => "unauthorized",
            Err(_) => "error",
        };
        metrics::ROTATIONS.with_label_values(&[status]).inc();

        result
    }

    async fn rotate(
        &self,
        access_token: &str,
        presented_secret: &[u8],
        request_ip: &str,
    ) -> Result<(String, RefreshSecret), AuthError> {
        // Signature or structural corruption fails here, before any store
        // access. The credential's own expiry is not checked: rotating an
        // expired access credential is the point of this operation.
        let claims = self.codec.verify(access_token)?;

        let record = match self.store.get(claims.refresh_token_id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(refresh_record = %claims.refresh_token_id, "refresh record not found");
                return Err(AuthError::unauthorized("unknown refresh record"));
            }
            Err(e) => {
                // Store faults collapse to Unauthorized so a caller cannot
                // probe record existence; the cause stays in the log.
                error!(
                    error = %e,
                    refresh_record = %claims.refresh_token_id,
                    "refresh record lookup failed"
                );
                return Err(AuthError::unauthorized("refresh record lookup failed"));
            }
        };

        // Expiry is checked whether or not the digest would match.
        let now = Utc::now();
        if record.is_expired_at(now) {
            return Err(AuthError::unauthorized("refresh record expired"));
        }

        if !verify_secret(presented_secret, &record.hash)? {
            return Err(AuthError::unauthorized("refresh secret mismatch"));
        }

        if request_ip != claims.sub_ip {
            metrics::ANOMALY_ALERTS.inc();
            let notifier = Arc::clone(&self.notifier);
            let user_id = claims.sub;
            let message = new_ip_alert(request_ip, now);
            let new_ip = request_ip.to_string();
            // Detached: the response never waits on alert delivery.
            tokio::spawn(async move {
                if let Err(e) = notifier.notify(user_id, &message).await {
                    error!(
                        error = %e,
                        user_id = %user_id,
                        new_ip = %new_ip,
                        "anomaly alert delivery failed"
                    );
                }
            });
        }

        // Detached: retire the consumed record off the critical path. Until
        // the delete lands, the same secret can race a second rotation.
        let store = Arc::clone(&self.store);
        let record_id = record.id;
        tokio::spawn(async move {
            if let Err(e) = store.delete(record_id).await {
                error!(
                    error = %e,
                    refresh_record = %record_id,
                    "failed to delete consumed refresh record"
                );
            }
        });

        let pair = self.issuer.create_session(claims.sub, request_ip).await?;

        info!(
            user_id = %claims.sub,
            consumed_record = %record.id,
            "rotated session credentials"
        );

        Ok(pair)
    }
}

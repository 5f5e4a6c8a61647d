//! Webhook push delivery for anomaly alerts.

use crate::error::AuthError;
use crate::notify::Notifier;
use async_trait::async_trait;
use uuid::Uuid;

/// Delivers alerts by POSTing them to a configured endpoint.
pub struct WebhookNotifier {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookNotifier {
    /// Create a notifier pushing to `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        WebhookNotifier {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, user_id: Uuid, message: &[u8]) -> Result<(), AuthError> {
        let payload = serde_json::json!({
            "user_id": user_id,
            "message": String::from_utf8_lossy(message),
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AuthError::notify(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::notify(format!("HTTP {}", response.status())));
        }

        Ok(())
    }
}

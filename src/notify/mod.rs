//! Best-effort out-of-band alert delivery.

pub mod memory;
pub mod webhook;

pub use memory::InMemoryNotifier;
pub use webhook::WebhookNotifier;

use crate::error::AuthError;
use async_trait::async_trait;
use uuid::Uuid;

/// Notification capability consumed by the token service. Delivery is
/// best-effort; the service never retries and never surfaces the outcome
/// to its caller.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver an alert message to the user out of band.
    async fn notify(&self, user_id: Uuid, message: &[u8]) -> Result<(), AuthError>;
}

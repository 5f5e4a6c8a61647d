//! Recording notifier for tests.

use crate::error::AuthError;
use crate::notify::Notifier;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process notifier that records every delivery. A failure toggle lets
/// tests force delivery errors.
#[derive(Default)]
pub struct InMemoryNotifier {
    sent: RwLock<Vec<(Uuid, Vec<u8>)>>,
    failing: AtomicBool,
}

impl InMemoryNotifier {
    /// Create an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent delivery fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    /// All recorded deliveries, in order.
    pub async fn sent(&self) -> Vec<(Uuid, Vec<u8>)> {
        self.sent.read().await.clone()
    }

    /// Number of recorded deliveries.
    pub async fn count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, user_id: Uuid, message: &[u8]) -> Result<(), AuthError> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(AuthError::notify("delivery failure forced by test"));
        }
        self.sent.write().await.push((user_id, message.to_vec()));
        Ok(())
    }
}

//! Server-side refresh record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a refresh secret's digest and expiry, keyed by a
/// store-generated ID. The raw secret is never part of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRecord {
    /// Store-generated identifier, referenced by the access credential.
    pub id: Uuid,
    /// PHC-string digest of the refresh secret.
    pub hash: String,
    /// Absolute expiry. Past this instant the record is unusable,
    /// whether or not it still exists in the store.
    pub expires_at: DateTime<Utc>,
}

impl RefreshRecord {
    /// Whether the record is unusable at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

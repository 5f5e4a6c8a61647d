//! Durable keyed storage for refresh records.

pub mod memory;
pub mod redis;

pub use memory::InMemoryRefreshStore;
pub use redis::RedisRefreshStore;

use crate::error::AuthError;
use crate::refresh::RefreshRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Storage capability consumed by the token service. The store owns
/// record IDs: `create` generates one and hands it back.
#[async_trait]
pub trait RefreshStore: Send + Sync {
    /// Persist a new record, returning the generated record ID.
    async fn create(&self, hash: String, expires_at: DateTime<Utc>) -> Result<Uuid, AuthError>;

    /// Look up a record by ID. `Ok(None)` means not found.
    async fn get(&self, id: Uuid) -> Result<Option<RefreshRecord>, AuthError>;

    /// Delete a record by ID.
    async fn delete(&self, id: Uuid) -> Result<(), AuthError>;
}

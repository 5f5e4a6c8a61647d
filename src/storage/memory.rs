//! In-memory refresh record store.

use crate::error::AuthError;
use crate::refresh::RefreshRecord;
use crate::storage::RefreshStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process refresh store. Used as the test double and for deployments
/// that accept losing sessions on restart. Expired records are retained;
/// only deletion removes them.
#[derive(Default)]
pub struct InMemoryRefreshStore {
    records: RwLock<HashMap<Uuid, RefreshRecord>>,
    lookups: AtomicU64,
}

impl InMemoryRefreshStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// How many lookups have been served. Lets tests observe that a
    /// rejected credential never reached the store.
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RefreshStore for InMemoryRefreshStore {
    async fn create(&self, hash: String, expires_at: DateTime<Utc>) -> Result<Uuid, AuthError> {
        let record = RefreshRecord {
            id: Uuid::new_v4(),
            hash,
            expires_at,
        };
        let id = record.id;
        self.records.write().await.insert(id, record);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Option<RefreshRecord>, AuthError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AuthError> {
        self.records.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_delete() {
        let store = InMemoryRefreshStore::new();
        let expires_at = Utc::now() + chrono::Duration::days(7);

        let id = store.create("digest".to_string(), expires_at).await.unwrap();

        let record = store.get(id).await.unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.hash, "digest");
        assert_eq!(record.expires_at, expires_at);

        store.delete(id).await.unwrap();
        assert!(store.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_store_generated_and_distinct() {
        let store = InMemoryRefreshStore::new();
        let expires_at = Utc::now() + chrono::Duration::days(7);

        let a = store.create("d1".to_string(), expires_at).await.unwrap();
        let b = store.create("d2".to_string(), expires_at).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_lookup_counter() {
        let store = InMemoryRefreshStore::new();
        assert_eq!(store.lookup_count(), 0);

        let _ = store.get(Uuid::new_v4()).await.unwrap();
        assert_eq!(store.lookup_count(), 1);
    }

    #[tokio::test]
    async fn test_expired_records_are_retained() {
        let store = InMemoryRefreshStore::new();
        let id = store
            .create("digest".to_string(), Utc::now() - chrono::Duration::hours(1))
            .await
            .unwrap();

        let record = store.get(id).await.unwrap().unwrap();
        assert!(record.is_expired_at(Utc::now()));
    }
}

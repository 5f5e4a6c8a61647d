//! Redis-backed refresh record store.

use crate::error::AuthError;
use crate::refresh::RefreshRecord;
use crate::storage::RefreshStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Retention window past a record's expiry before the key lapses.
/// Expired records stay readable for this long; the rotation path still
/// rejects them by `expires_at`, the TTL only bounds storage growth.
const EXPIRED_RETENTION_SECS: u64 = 86_400;

/// Durable refresh store over Redis.
pub struct RedisRefreshStore {
    conn: Arc<RwLock<ConnectionManager>>,
}

impl RedisRefreshStore {
    /// Connect to Redis at the given URL.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the connection cannot be established.
    pub async fn new(redis_url: &str) -> Result<Self, AuthError> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(RedisRefreshStore {
            conn: Arc::new(RwLock::new(conn)),
        })
    }

    fn key(id: Uuid) -> String {
        format!("refresh:{}", id)
    }
}

#[async_trait]
impl RefreshStore for RedisRefreshStore {
    async fn create(&self, hash: String, expires_at: DateTime<Utc>) -> Result<Uuid, AuthError> {
        let record = RefreshRecord {
            id: Uuid::new_v4(),
            hash,
            expires_at,
        };
        let value = serde_json::to_string(&record)
            .map_err(|e| AuthError::internal(e.to_string()))?;

        let ttl = (expires_at - Utc::now()).num_seconds().max(0) as u64 + EXPIRED_RETENTION_SECS;

        let mut conn = self.conn.write().await;
        conn.set_ex::<_, _, ()>(Self::key(record.id), &value, ttl)
            .await?;

        Ok(record.id)
    }

    async fn get(&self, id: Uuid) -> Result<Option<RefreshRecord>, AuthError> {
        let mut conn = self.conn.write().await;
        let value: Option<String> = conn.get(Self::key(id)).await?;

        match value {
            Some(v) => {
                let record = serde_json::from_str(&v)
                    .map_err(|e| AuthError::internal(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), AuthError> {
        let mut conn = self.conn.write().await;
        conn.del::<_, ()>(Self::key(id)).await?;
        Ok(())
    }
}

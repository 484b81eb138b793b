//! Local record store
//!
//! Key-value persistence over the `records` table. Values are opaque
//! serialized JSON; the store does not validate schema. Writes are single
//! atomic statements, so a failed write leaves the previous value intact;
//! there are no partial writes to recover from.
//!
//! Read-modify-write sequences (favorite toggles, rating updates) must hold
//! the per-key lock from [`RecordStore::lock`] across the read and the write;
//! otherwise two racing writers on the same key resolve as last-write-wins.

use serde::{de::DeserializeOwned, Serialize};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{Error, Result};

/// Well-known record keys
pub mod keys {
    /// User-authored recipes (JSON array of stored recipes)
    pub const CUSTOM_RECIPES: &str = "customRecipes";
    /// Favorite sets per user (JSON map: user id -> recipe id list)
    pub const FAVORITES: &str = "favorites";
    /// Ratings per user (JSON map: user id -> recipe id -> value)
    pub const RATINGS: &str = "ratings";
    /// Currently signed-in identity (JSON object)
    pub const CURRENT_USER: &str = "currentUser";
}

/// Handle to the key-value record store
///
/// Created once at startup and passed to every operation; there is no
/// process-wide storage state.
#[derive(Clone)]
pub struct RecordStore {
    pool: SqlitePool,
    key_locks: Arc<StdMutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            key_locks: Arc::new(StdMutex::new(HashMap::new())),
        }
    }

    /// Underlying connection pool (users table queries share it)
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Read the raw value stored under `key`, `None` when absent
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT value FROM records WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.and_then(|(value,)| value))
    }

    /// Store `value` under `key`, replacing any previous value
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO records (key, value, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove the value stored under `key`; removing an absent key is a no-op
    pub async fn remove(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM records WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Read and deserialize the value stored under `key`
    ///
    /// A value that fails to deserialize surfaces as
    /// [`Error::MalformedData`]; callers degrade rather than crash.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key).await? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                Error::MalformedData {
                    key: key.to_string(),
                    reason: e.to_string(),
                }
            }),
        }
    }

    /// Serialize and store `value` under `key`
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| Error::Internal(format!("Failed to serialize '{}': {}", key, e)))?;
        self.set(key, &raw).await
    }

    /// Acquire the mutation lock for `key`
    ///
    /// The guard must be held across a read-modify-write sequence. Locks are
    /// created lazily, one per key ever locked.
    pub async fn lock(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self
                .key_locks
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            map.entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

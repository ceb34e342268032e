//! Chunk directory service.
//!
//! The directory answers two questions about the chunk database: which map
//! chunks exist, and what is stored under a given key. It owns no state of
//! its own; everything is read through an injected [`TileStore`].
//!
//! Listing decodes every store key with the tile key codec and silently
//! skips keys that are not tile keys, so unrelated records sharing the
//! database never show up in chunk listings.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::chunk::{decode_tile_key, BoundingBox};
use crate::store::{StoreError, TileStore};

/// Errors that can occur during directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A lookup was attempted with an empty key.
    #[error("Key is required")]
    EmptyKey,

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A value read from the store, decoded as far as it will go.
///
/// Payloads are usually JSON documents, but the store does not enforce
/// that. Values that parse as JSON surface structured; anything else
/// surfaces as the raw text, unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CachedValue {
    /// The stored text parsed as a JSON document.
    Json(serde_json::Value),
    /// The stored text as-is, for values that are not valid JSON.
    Text(String),
}

impl CachedValue {
    /// Classifies raw store text, preferring JSON.
    pub fn from_raw(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => CachedValue::Json(value),
            Err(_) => CachedValue::Text(raw),
        }
    }
}

/// Read-only view over the chunk database.
#[derive(Clone)]
pub struct ChunkDirectory {
    store: Arc<dyn TileStore>,
}

impl ChunkDirectory {
    /// Creates a directory reading from the given store.
    pub fn new(store: Arc<dyn TileStore>) -> Self {
        Self { store }
    }

    /// Lists every map chunk that has an entry in the store.
    ///
    /// Enumerates all store keys and decodes each with the tile key codec.
    /// Keys that are not tile keys are skipped without any logging or
    /// error; the store is shared with other record types and their keys
    /// are simply not chunks.
    ///
    /// Chunks come back in store key order, which is not meaningful to
    /// callers.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Store` if the store cannot be enumerated.
    pub async fn list_tiles(&self) -> Result<Vec<BoundingBox>, DirectoryError> {
        let keys = self.store.keys().await?;
        let tiles: Vec<BoundingBox> = keys
            .iter()
            .filter_map(|key| decode_tile_key(key))
            .collect();

        debug!(
            keys = keys.len(),
            tiles = tiles.len(),
            "listed chunk directory"
        );

        Ok(tiles)
    }

    /// Looks up the value stored under `key`.
    ///
    /// Any non-empty key may be looked up, not only tile keys. The key is
    /// validated before the store is consulted, so an empty key never
    /// reaches the backend.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists, classified via [`CachedValue::from_raw`]
    /// - `Ok(None)` if the key is not in the store
    ///
    /// # Errors
    ///
    /// - `DirectoryError::EmptyKey` if `key` is empty
    /// - `DirectoryError::Store` if the store lookup fails
    pub async fn get_value(&self, key: &str) -> Result<Option<CachedValue>, DirectoryError> {
        if key.is_empty() {
            return Err(DirectoryError::EmptyKey);
        }

        let value = self.store.get(key).await?;
        debug!(key, found = value.is_some(), "looked up chunk value");

        Ok(value.map(CachedValue::from_raw))
    }
}

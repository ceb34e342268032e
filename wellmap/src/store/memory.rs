//! In-memory store backend.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{BoxFuture, StoreError, TileStore};

/// In-memory `TileStore` backed by a sorted map.
///
/// Backs tests and local development. Entries live for the lifetime of the
/// process; there is no eviction and no persistence. `keys()` returns keys
/// in lexicographic order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated from `(key, value)` pairs.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Stores `value` under `key`, replacing any existing value.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().insert(key.into(), value.into());
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl TileStore for MemoryStore {
    fn keys(&self) -> BoxFuture<'_, Result<Vec<String>, StoreError>> {
        // Snapshot under the lock; the guard must not be held across await
        // points because it is not Send.
        let keys: Vec<String> = self.entries.read().keys().cloned().collect();
        Box::pin(async move { Ok(keys) })
    }

    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<String>, StoreError>> {
        let value = self.entries.read().get(key).cloned();
        Box::pin(async move { Ok(value) })
    }
}

//! Key-value store access for chunk payloads.
//!
//! The `TileStore` trait is the seam between the chunk directory and
//! whatever actually holds the data. The production backend is Redis; an
//! in-memory backend backs tests and local development.
//!
//! # String keys, string values
//!
//! Keys and values are both text. Keys are tile keys (plus whatever else a
//! deployment happens to put in the same database), values are chunk
//! payloads, usually JSON but not required to be.
//!
//! # Dyn compatibility
//!
//! Async methods return `Pin<Box<dyn Future>>` so the trait can be used as
//! a trait object (`Arc<dyn TileStore>`), which is how the directory holds
//! its store.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

mod memory;
mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("Store connection failed: {0}")]
    Connection(String),

    /// The store rejected or failed a request after connecting.
    #[error("Store request failed: {0}")]
    Request(String),

    /// A stored value was not valid UTF-8 text.
    #[error("Value for key {key:?} is not valid UTF-8")]
    NonUtf8Value { key: String },
}

/// Read-only key-value interface over the chunk database.
///
/// A missing key is not an error: `get()` distinguishes absence
/// (`Ok(None)`) from backend failure (`Err`), and callers rely on that
/// distinction to map the two cases differently.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use across async tasks.
pub trait TileStore: Send + Sync {
    /// List every key currently in the store.
    ///
    /// Returns keys in backend iteration order. No pattern filtering is
    /// applied here; callers decide which keys they care about.
    ///
    /// # Returns
    ///
    /// - `Ok(keys)` with all keys, in no guaranteed order
    /// - `Err(_)` if the backend cannot be queried
    fn keys(&self) -> BoxFuture<'_, Result<Vec<String>, StoreError>>;

    /// Retrieve the value stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The store key to look up
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if the key is not present
    /// - `Err(_)` if the backend cannot be queried
    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<String>, StoreError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Connection("refused".to_string());
        assert_eq!(err.to_string(), "Store connection failed: refused");

        let err = StoreError::Request("timed out".to_string());
        assert_eq!(err.to_string(), "Store request failed: timed out");

        let err = StoreError::NonUtf8Value {
            key: "location:(1, 2)-(3, 4)".to_string(),
        };
        assert!(err.to_string().contains("location:(1, 2)-(3, 4)"));
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}

//! Redis store backend.
//!
//! Production deployments keep chunk payloads in Redis. Connections go
//! through `ConnectionManager`, which multiplexes one connection across
//! clones and reconnects on failure, so `RedisStore` is cheap to clone and
//! share.

use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use super::{BoxFuture, StoreError, TileStore};

/// Pattern passed to KEYS when listing the database.
const KEY_PATTERN: &str = "*";

/// `TileStore` backed by a Redis database.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis at `url` (e.g., `"redis://localhost:6379"`).
    ///
    /// Establishes the initial connection eagerly, so an unreachable server
    /// fails here rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the URL is invalid or the server
    /// cannot be reached.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client =
            redis::Client::open(url).map_err(|err| StoreError::Connection(err.to_string()))?;
        let connection = client
            .get_connection_manager()
            .await
            .map_err(|err| StoreError::Connection(err.to_string()))?;

        Ok(Self { connection })
    }
}

impl TileStore for RedisStore {
    fn keys(&self) -> BoxFuture<'_, Result<Vec<String>, StoreError>> {
        let mut connection = self.connection.clone();
        Box::pin(async move {
            // KEYS walks the entire keyspace in one blocking pass on the
            // server. Acceptable at the expected scale of tens of thousands
            // of chunk keys; switch to incremental SCAN before pointing this
            // at a database much larger than that.
            let keys: Vec<String> = connection
                .keys(KEY_PATTERN)
                .await
                .map_err(map_redis_error)?;
            Ok(keys)
        })
    }

    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<String>, StoreError>> {
        let key = key.to_owned();
        let mut connection = self.connection.clone();
        Box::pin(async move {
            let value: Option<Vec<u8>> = connection.get(&key).await.map_err(map_redis_error)?;
            match value {
                Some(bytes) => match String::from_utf8(bytes) {
                    Ok(text) => Ok(Some(text)),
                    Err(_) => Err(StoreError::NonUtf8Value { key }),
                },
                None => Ok(None),
            }
        })
    }
}

/// Maps a Redis error onto the store error taxonomy.
///
/// Transport-level failures surface as `Connection`, everything else
/// (bad commands, type mismatches, server errors) as `Request`.
fn map_redis_error(err: redis::RedisError) -> StoreError {
    if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped() {
        StoreError::Connection(err.to_string())
    } else {
        StoreError::Request(err.to_string())
    }
}

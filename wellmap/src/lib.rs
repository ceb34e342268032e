//! Wellmap - chunked well depth data access
//!
//! This library provides the core functionality behind the well depth map
//! backend: decoding and encoding the tile keys that identify map chunks,
//! reading chunk payloads from a key-value store, and proxying place
//! autocomplete searches.
//!
//! The HTTP surface lives in the `wellmap-server` crate; everything here is
//! transport-agnostic and testable against an in-memory store.

pub mod chunk;
pub mod directory;
pub mod places;
pub mod store;

pub use chunk::{decode_tile_key, encode_tile_key, BoundingBox, GeoPoint};
pub use directory::{CachedValue, ChunkDirectory, DirectoryError};
pub use store::{MemoryStore, RedisStore, StoreError, TileStore};

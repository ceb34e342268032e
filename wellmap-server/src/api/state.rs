//! Application state shared across HTTP handlers

use std::sync::Arc;

use wellmap::directory::ChunkDirectory;
use wellmap::places::PlacesProvider;

/// Application state shared across handlers
///
/// Everything a handler needs is injected here; handlers never construct
/// store or provider clients themselves.
#[derive(Clone)]
pub struct AppState {
    /// Read-only view over the chunk database
    pub directory: ChunkDirectory,

    /// Place autocomplete provider (None = proxy disabled)
    /// Source: GOOGLE_API_KEY env var
    pub places: Option<Arc<dyn PlacesProvider>>,

    /// Origin prefixes allowed to use the places proxy
    /// Source: ALLOWED_ORIGINS env var (comma-separated)
    pub allowed_origins: Vec<String>,
}

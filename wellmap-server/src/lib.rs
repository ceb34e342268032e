//! wellmap-server library exports (for testing)

pub mod api;

// Re-exports
pub use api::{create_router, AppState};

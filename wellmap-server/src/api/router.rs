//! Router setup and configuration

use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use crate::api::handlers;
use crate::api::middleware::cors_middleware;
use crate::api::state::AppState;

/// Create the API router
///
/// All routes share the CORS layer; the places origin allowlist is enforced
/// inside its handler, not here.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/keys",
            get(handlers::list_keys).post(handlers::get_key_value),
        )
        .route(
            "/places-autocomplete",
            get(handlers::places_autocomplete),
        )
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

//! Chunk directory handlers

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use wellmap::chunk::BoundingBox;
use wellmap::directory::CachedValue;

use crate::api::error::ServerError;
use crate::api::state::AppState;

/// Request body for POST /keys
#[derive(Debug, Deserialize)]
pub struct KeyLookupRequest {
    /// Store key to look up
    #[serde(default)]
    pub key: Option<String>,
}

/// GET /keys - List every map chunk in the store
///
/// Returns a JSON array of bounding boxes, one per store key that decodes
/// as a tile key. Keys belonging to other record types are skipped.
pub async fn list_keys(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BoundingBox>>, ServerError> {
    let tiles = state.directory.list_tiles().await?;
    Ok(Json(tiles))
}

/// POST /keys - Look up the value stored under a key
///
/// A missing body, an unreadable body, and a body without a `key` field all
/// count as an empty key and are rejected with 400. Values that parse as
/// JSON come back as JSON; anything else comes back as plain text, exactly
/// as stored.
pub async fn get_key_value(
    State(state): State<Arc<AppState>>,
    body: Option<Json<KeyLookupRequest>>,
) -> Result<Response, ServerError> {
    let key = body
        .and_then(|Json(request)| request.key)
        .unwrap_or_default();

    let value = state
        .directory
        .get_value(&key)
        .await?
        .ok_or(ServerError::KeyNotFound)?;

    let response = match value {
        CachedValue::Json(json) => Json(json).into_response(),
        CachedValue::Text(text) => text.into_response(),
    };

    Ok(response)
}

//! Place search proxy handler

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{
        header::{ORIGIN, REFERER},
        HeaderMap,
    },
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::error::ServerError;
use crate::api::state::AppState;

/// Query parameters for GET /places-autocomplete
#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    /// Search text typed by the user
    #[serde(default)]
    pub input: Option<String>,
}

/// GET /places-autocomplete - Proxy a place search to the places API
///
/// Browser-facing endpoint: the request's Origin header (or Referer when
/// Origin is absent) must start with one of the configured origin prefixes,
/// otherwise the request is refused with 403 before anything is forwarded.
/// The upstream response body is relayed unchanged, and an upstream error
/// status is relayed as-is too.
pub async fn places_autocomplete(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AutocompleteQuery>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ServerError> {
    let origin = headers
        .get(ORIGIN)
        .or_else(|| headers.get(REFERER))
        .and_then(|value| value.to_str().ok());

    let allowed = origin.is_some_and(|origin| {
        state
            .allowed_origins
            .iter()
            .any(|prefix| origin.starts_with(prefix.as_str()))
    });
    if !allowed {
        return Err(ServerError::OriginDenied);
    }

    let input = query
        .input
        .filter(|input| !input.is_empty())
        .ok_or(ServerError::MissingInput)?;

    let places = state.places.as_ref().ok_or(ServerError::PlacesDisabled)?;

    debug!(input = %input, "forwarding place search");
    let suggestions = places.autocomplete(&input).await?;

    Ok(Json(suggestions))
}

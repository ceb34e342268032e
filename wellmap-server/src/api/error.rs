//! API error taxonomy and response mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use wellmap::directory::DirectoryError;
use wellmap::places::PlacesError;
use wellmap::store::StoreError;

/// Errors a request can end with, each mapped to an HTTP status.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Lookup request without a key.
    #[error("Key is required")]
    MissingKey,

    /// Lookup key exists nowhere in the store.
    #[error("Key not found")]
    KeyNotFound,

    /// Place search without a search text.
    #[error("Input query parameter is required")]
    MissingInput,

    /// Place search from an origin outside the allowlist.
    #[error("Access denied: unauthorized origin")]
    OriginDenied,

    /// Place search while the proxy is not configured.
    #[error("Place search is not configured")]
    PlacesDisabled,

    /// The places API answered with a non-success status.
    #[error("Places API returned status {status}: {reason}")]
    PlacesUpstream {
        /// Status code to relay to the client.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },

    /// The chunk store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The places API could not be reached.
    #[error("Places request failed: {0}")]
    Places(String),
}

impl ServerError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingKey | ServerError::MissingInput => StatusCode::BAD_REQUEST,
            ServerError::KeyNotFound => StatusCode::NOT_FOUND,
            ServerError::OriginDenied => StatusCode::FORBIDDEN,
            ServerError::PlacesDisabled => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::PlacesUpstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ServerError::Store(_) | ServerError::Places(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DirectoryError> for ServerError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::EmptyKey => ServerError::MissingKey,
            DirectoryError::Store(err) => ServerError::Store(err),
        }
    }
}

impl From<PlacesError> for ServerError {
    fn from(err: PlacesError) -> Self {
        match err {
            PlacesError::Http(message) => ServerError::Places(message),
            PlacesError::Upstream { status, reason } => {
                ServerError::PlacesUpstream { status, reason }
            }
        }
    }
}

/// API error response body
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Client mistakes are routine; backend failures are worth a log line.
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(ServerError::MissingKey.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServerError::KeyNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServerError::MissingInput.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ServerError::OriginDenied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ServerError::PlacesDisabled.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ServerError::Store(StoreError::Request("boom".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::Places("timeout".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_status_passes_through() {
        let err = ServerError::PlacesUpstream {
            status: 429,
            reason: "Too Many Requests".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_unmappable_upstream_status_becomes_bad_gateway() {
        let err = ServerError::PlacesUpstream {
            status: 0,
            reason: "garbage".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_empty_key_maps_to_missing_key() {
        let err: ServerError = DirectoryError::EmptyKey.into();
        assert!(matches!(err, ServerError::MissingKey));
    }

    #[test]
    fn test_directory_store_error_maps_to_store() {
        let err: ServerError =
            DirectoryError::Store(StoreError::Connection("down".to_string())).into();
        assert!(matches!(err, ServerError::Store(StoreError::Connection(_))));
    }

    #[test]
    fn test_places_error_conversions() {
        let err: ServerError = PlacesError::Http("refused".to_string()).into();
        assert!(matches!(err, ServerError::Places(_)));

        let err: ServerError = PlacesError::Upstream {
            status: 500,
            reason: "Internal Server Error".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            ServerError::PlacesUpstream { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn test_into_response_missing_key() {
        let response = ServerError::MissingKey.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Key is required");
    }

    #[tokio::test]
    async fn test_into_response_key_not_found() {
        let response = ServerError::KeyNotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Key not found");
    }

    #[tokio::test]
    async fn test_into_response_store_failure() {
        let error = ServerError::Store(StoreError::Request("KEYS failed".to_string()));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Store request failed: KEYS failed");
    }

    #[tokio::test]
    async fn test_into_response_origin_denied() {
        let response = ServerError::OriginDenied.into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Access denied: unauthorized origin");
    }
}

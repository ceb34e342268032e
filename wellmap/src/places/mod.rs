//! Place autocomplete provider.
//!
//! The map's search box needs place suggestions, but the browser cannot
//! call the Google Places API directly without exposing the API key. The
//! backend proxies the request instead: the server holds the key, forwards
//! the search text, and relays Google's response untouched.
//!
//! Requires a Google Cloud Platform API key with the Places API enabled.
//! Deployments without a key simply run with the proxy disabled.

use std::time::Duration;

use thiserror::Error;

use crate::store::BoxFuture;

/// Google Places autocomplete endpoint.
const AUTOCOMPLETE_ENDPOINT: &str =
    "https://maps.googleapis.com/maps/api/place/autocomplete/json";

/// Upstream request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur while proxying a place search.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// The upstream API could not be reached or returned garbage.
    #[error("Places request failed: {0}")]
    Http(String),

    /// The upstream API answered with a non-success status.
    #[error("Places API returned status {status}: {reason}")]
    Upstream {
        /// HTTP status code from the upstream response.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },
}

/// Place autocomplete interface.
///
/// Returns the provider's response document as-is; the server relays it to
/// the browser without reshaping.
pub trait PlacesProvider: Send + Sync {
    /// Fetches autocomplete suggestions for the given search text.
    ///
    /// # Arguments
    ///
    /// * `input` - Raw user search text, unencoded
    fn autocomplete(&self, input: &str) -> BoxFuture<'_, Result<serde_json::Value, PlacesError>>;
}

/// `PlacesProvider` backed by the Google Places API.
pub struct GooglePlacesClient {
    http: reqwest::Client,
    api_key: String,
}

impl GooglePlacesClient {
    /// Creates a client using the given API key.
    ///
    /// # Errors
    ///
    /// Returns `PlacesError::Http` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, PlacesError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|err| PlacesError::Http(format!("failed to create HTTP client: {err}")))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
        })
    }

    /// Builds the autocomplete request URL for the given search text.
    ///
    /// The search text is percent-encoded; the API key is appended as-is.
    fn autocomplete_url(&self, input: &str) -> String {
        format!(
            "{}?input={}&key={}",
            AUTOCOMPLETE_ENDPOINT,
            urlencoding::encode(input),
            self.api_key
        )
    }
}

impl PlacesProvider for GooglePlacesClient {
    fn autocomplete(&self, input: &str) -> BoxFuture<'_, Result<serde_json::Value, PlacesError>> {
        let url = self.autocomplete_url(input);
        Box::pin(async move {
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(|err| PlacesError::Http(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(PlacesError::Upstream {
                    status: status.as_u16(),
                    reason: status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string(),
                });
            }

            response
                .json()
                .await
                .map_err(|err| PlacesError::Http(err.to_string()))
        })
    }
}

//! HTTP request handlers

mod health;
mod keys;
mod places;

pub use health::{health_check, HealthResponse};
pub use keys::{get_key_value, list_keys, KeyLookupRequest};
pub use places::{places_autocomplete, AutocompleteQuery};

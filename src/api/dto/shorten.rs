//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// `url` is optional at the wire level so that a missing field reaches
/// the service as an empty URL and gets the same validation error as an
/// empty one, instead of a generic deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,

    /// Optional requested identifier. Collisions are resolved by
    /// regeneration, so the stored identifier may differ.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Response for a created (or re-used) mapping.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: String,
    pub long_url: String,
    pub short_url: String,
}

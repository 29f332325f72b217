//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten. Stored verbatim; no validation beyond presence.
    pub url: String,
}

/// Response carrying the fully-qualified short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

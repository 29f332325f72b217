//! Host extraction from HTTP request headers.

use crate::error::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Extracts the request's own host from the `Host` header.
///
/// The value is returned verbatim, port included, so short URLs built from it
/// point back at the address the client actually used (for example
/// `localhost:5000`).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing, empty,
/// or not valid UTF-8.
pub fn extract_host(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?;

    if host.is_empty() {
        return Err(AppError::bad_request("Invalid Host header", json!({})));
    }

    Ok(host.to_string())
}

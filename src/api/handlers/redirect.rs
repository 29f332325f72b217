//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `302 Found` with a `Location` header pointing at the stored URL, matching
/// the classic shortener behavior so clients re-resolve on every visit.
///
/// # Metrics
///
/// Increments `successful_redirects_total` on a hit and
/// `failed_lookups_total` on a miss; latency is observed either way.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let _timer = state.metrics.redirect_latency.start_timer();

    match state.shortener.resolve(&code).await {
        Ok(mapping) => {
            state.metrics.successful_redirects.inc();
            Ok((StatusCode::FOUND, [(header::LOCATION, mapping.long_url)]))
        }
        Err(err @ AppError::NotFound { .. }) => {
            state.metrics.failed_lookups.inc();
            Err(err)
        }
        Err(err) => Err(err),
    }
}

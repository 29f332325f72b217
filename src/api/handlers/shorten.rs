//! Handler for the shorten endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host;

/// Creates a short URL for the submitted long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with the short URL built from the request's own `Host`
/// header:
///
/// ```json
/// { "short_url": "http://localhost:5000/aB3xY9" }
/// ```
///
/// Shortening the same URL twice yields two distinct codes.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, the `url` field is
/// missing, or the `Host` header is absent. The extractor rejection is mapped
/// explicitly so clients see a 400 rather than axum's default 422, with a
/// message matching the rejection kind.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    // Observes on drop, so failures are timed too.
    let _timer = state.metrics.shorten_latency.start_timer();

    let Json(payload) = payload.map_err(|rejection| {
        let message = match &rejection {
            // Well-formed JSON that doesn't deserialize, i.e. no `url` field.
            JsonRejection::JsonDataError(_) => "Missing \"url\" field",
            JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON",
            JsonRejection::MissingJsonContentType(_) => "Request body must be JSON",
            _ => "Invalid request body",
        };

        AppError::bad_request(message, json!({ "reason": rejection.body_text() }))
    })?;

    let host = extract_host(&headers)?;

    let mapping = state.shortener.shorten(payload.url).await?;
    state.metrics.urls_shortened.inc();

    let short_url = state.shortener.short_url(&host, &mapping.code);

    Ok((StatusCode::CREATED, Json(ShortenResponse { short_url })))
}

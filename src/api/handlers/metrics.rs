//! Handler for the metrics exposition endpoint.

use axum::{extract::State, http::header, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;
use crate::metrics::TEXT_FORMAT;
use crate::state::AppState;

/// Emits all registered metrics in the Prometheus text exposition format.
///
/// # Endpoint
///
/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.export().map_err(|e| {
        AppError::internal(
            "Failed to encode metrics",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, TEXT_FORMAT)], body))
}

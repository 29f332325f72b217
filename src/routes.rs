//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Landing page
//! - `POST /shorten`  - Create a short URL
//! - `GET  /metrics`  - Prometheus text exposition
//! - `GET  /{code}`   - Short link redirect
//!
//! Static paths take precedence over the `/{code}` capture, so `/metrics`
//! can never be shadowed by a short code.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{home_handler, metrics_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_handler))
        .route("/metrics", get(metrics_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

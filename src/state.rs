//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::metrics::Metrics;

/// Application context passed to every handler via axum `State`.
///
/// Holds the single long-lived store handle (inside the service) and the
/// metrics registry; handlers never reach for process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<SqliteMappingRepository>>,
    pub metrics: Arc<Metrics>,
}

//! HTTP server initialization and runtime setup.
//!
//! Handles database pool creation, schema migration, state construction, and
//! the Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::metrics::Metrics;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - the SQLite connection pool (creating the database file if absent)
/// - the schema via embedded migrations (a no-op on an initialized file)
/// - the metrics registry
/// - the Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The database file cannot be opened or migrated
/// - The listen address is invalid or the bind fails
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let connect_options = SqliteConnectOptions::new()
        .filename(&config.db_file)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(connect_options)
        .await?;
    tracing::info!("Connected to database at {}", config.db_file);

    sqlx::migrate!("./migrations").run(&pool).await?;

    let metrics = Arc::new(Metrics::new()?);

    let repository = Arc::new(SqliteMappingRepository::new(pool));
    let shortener = Arc::new(ShortenerService::new(repository, config.code_length));

    let state = AppState {
        shortener,
        metrics,
    };

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

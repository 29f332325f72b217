//! # URL Shortener
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate keeps a clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and repository trait
//! - **Application Layer** ([`application`]) - Shortening and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` - create a short URL from `{"url": "..."}`
//! - `GET /{code}` - redirect to the stored URL
//! - `GET /metrics` - Prometheus text exposition
//! - `GET /` - HTML landing page
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional; defaults serve on 0.0.0.0:5000
//! # with a urls.db file in the working directory.
//! export DB_FILE="urls.db"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod metrics;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{Mapping, NewMapping};
    pub use crate::error::AppError;
    pub use crate::metrics::Metrics;
    pub use crate::state::AppState;
}

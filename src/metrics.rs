//! Prometheus metrics for the shorten and redirect paths.
//!
//! The [`Metrics`] container owns its own [`Registry`] and is constructed
//! explicitly at startup, then shared through
//! [`AppState`](crate::state::AppState). There is no process-wide registry.

use prometheus::{Counter, Encoder, Histogram, HistogramOpts, Registry, TextEncoder};

/// Content type of the Prometheus text exposition format.
pub use prometheus::TEXT_FORMAT;

/// Application metrics container.
pub struct Metrics {
    registry: Registry,

    /// Total number of successfully shortened URLs.
    pub urls_shortened: Counter,
    /// Total number of successful URL redirects.
    pub successful_redirects: Counter,
    /// Total number of failed short code lookups (404s).
    pub failed_lookups: Counter,

    /// Latency for `POST /shorten` requests.
    pub shorten_latency: Histogram,
    /// Latency for `GET /{code}` requests.
    pub redirect_latency: Histogram,
}

impl Metrics {
    /// Creates the metrics container and registers every metric.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric cannot be created or registered; this can
    /// only happen with malformed metric names and is fatal at startup.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let urls_shortened = Counter::new(
            "urls_shortened_total",
            "Total number of successfully shortened URLs",
        )?;
        let successful_redirects = Counter::new(
            "successful_redirects_total",
            "Total number of successful URL redirects",
        )?;
        let failed_lookups = Counter::new(
            "failed_lookups_total",
            "Total number of failed short code lookups (404s)",
        )?;

        let shorten_latency = Histogram::with_opts(HistogramOpts::new(
            "shorten_request_latency_seconds",
            "Latency for POST /shorten requests",
        ))?;
        let redirect_latency = Histogram::with_opts(HistogramOpts::new(
            "redirect_request_latency_seconds",
            "Latency for GET /{code} requests",
        ))?;

        registry.register(Box::new(urls_shortened.clone()))?;
        registry.register(Box::new(successful_redirects.clone()))?;
        registry.register(Box::new(failed_lookups.clone()))?;
        registry.register(Box::new(shorten_latency.clone()))?;
        registry.register(Box::new(redirect_latency.clone()))?;

        Ok(Self {
            registry,
            urls_shortened,
            successful_redirects,
            failed_lookups,
            shorten_latency,
            redirect_latency,
        })
    }

    /// Exports all registered metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;

        String::from_utf8(buffer)
            .map_err(|e| prometheus::Error::Msg(format!("metrics output is not UTF-8: {}", e)))
    }
}

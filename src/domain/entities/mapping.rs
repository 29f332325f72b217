//! Mapping entity representing a short code to long URL association.

/// A persisted short code to long URL mapping.
///
/// Created once on a successful shorten request, read many times during
/// redirect resolution, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Surrogate key assigned by the store, monotonically increasing.
    pub id: i64,
    /// Unique short code, immutable once created.
    pub code: String,
    /// Redirect target. Stored verbatim; the service performs no URL
    /// validation or normalization.
    pub long_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, code: String, long_url: String) -> Self {
        Self { id, code, long_url }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub code: String,
    pub long_url: String,
}

//! Repository trait for short URL mapping data access.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the mapping store.
///
/// The store exclusively owns all mapping records; no other component holds a
/// cached or duplicated copy.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping in a single atomic write.
    ///
    /// There is no separate existence pre-check: the unique constraint on the
    /// code column is the uniqueness guarantee, and a violation surfaces as a
    /// distinguishable conflict so callers can retry with a fresh code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError>;
}

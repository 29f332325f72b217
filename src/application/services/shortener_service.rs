//! Mapping creation and redirect resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Insert attempts per code length before the code space is widened.
const ATTEMPTS_PER_LENGTH: usize = 8;

/// How many characters the code may grow beyond the configured length
/// before shortening gives up with an internal error.
const MAX_EXTRA_LENGTH: usize = 3;

/// Service for creating short URL mappings and resolving redirects.
///
/// Code allocation is a single atomic step: each generated candidate is
/// inserted directly, and the store's unique constraint decides whether it was
/// free. A conflict answer triggers a retry with a fresh code, so two requests
/// racing on the same candidate can never both succeed.
pub struct ShortenerService<R: MappingRepository> {
    repository: Arc<R>,
    code_length: usize,
}

impl<R: MappingRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    ///
    /// `code_length` is the length of generated codes before any collision
    /// fallback widens them.
    pub fn new(repository: Arc<R>, code_length: usize) -> Self {
        Self {
            repository,
            code_length,
        }
    }

    /// Creates a mapping for `long_url` under a freshly generated code.
    ///
    /// The same URL shortened twice produces two distinct mappings; there is
    /// no deduplication by destination.
    ///
    /// # Collision handling
    ///
    /// Tries [`ATTEMPTS_PER_LENGTH`] random codes at the configured length.
    /// If every candidate collides, the length grows by one character, up to
    /// [`MAX_EXTRA_LENGTH`] extra characters, after which an internal error
    /// is returned. With a 62^6 code space this fallback is practically
    /// unreachable; it exists so the loop has a defined failure mode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the attempt budget is exhausted or
    /// the store fails.
    pub async fn shorten(&self, long_url: String) -> Result<Mapping, AppError> {
        for extra in 0..=MAX_EXTRA_LENGTH {
            let length = self.code_length + extra;

            for _ in 0..ATTEMPTS_PER_LENGTH {
                let code = generate_code(length);

                match self
                    .repository
                    .insert(NewMapping {
                        code,
                        long_url: long_url.clone(),
                    })
                    .await
                {
                    Ok(mapping) => return Ok(mapping),
                    Err(AppError::Conflict { .. }) => continue,
                    Err(other) => return Err(other),
                }
            }

            debug!(
                "All {} candidates of length {} collided, widening code space",
                ATTEMPTS_PER_LENGTH, length
            );
        }

        Err(AppError::internal(
            "Failed to allocate a unique short code",
            json!({
                "attempts": ATTEMPTS_PER_LENGTH * (MAX_EXTRA_LENGTH + 1),
                "max_length": self.code_length + MAX_EXTRA_LENGTH,
            }),
        ))
    }

    /// Resolves a short code to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Mapping, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))
    }

    /// Constructs the full short URL from the requesting host and a code.
    pub fn short_url(&self, host: &str, code: &str) -> String {
        format!("http://{}/{}", host.trim_end_matches('/'), code)
    }
}

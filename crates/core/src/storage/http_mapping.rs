//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// This is a pure function that returns the appropriate HTTP status code
/// for each error variant:
///
/// - `NotFound` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `Unavailable` -> 503 (Service Unavailable)
/// - `Timeout` -> 504 (Gateway Timeout)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use stocksync_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::product_not_found("abc-123");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::Unavailable(_) => 503,
        RepositoryError::Timeout(_) => 504,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

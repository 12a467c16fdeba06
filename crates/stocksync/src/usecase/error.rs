use thiserror::Error;

use stocksync_core::product::ValidationError;
use stocksync_core::storage::RepositoryError;

/// Errors surfaced by the product use case.
///
/// Validation failures happen before any store or cache call; store errors
/// propagate unchanged. The cache is never a source of errors here - at
/// worst it causes a fallback to the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl UseCaseError {
    /// Returns true if this error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(err) if err.is_not_found())
    }
}

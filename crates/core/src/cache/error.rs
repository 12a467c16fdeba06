use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// The in-memory backend never produces these; the variants exist so that
/// networked backends can report failures through the same trait. Callers
/// treat any cache error as a miss, never as a user-visible failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

use thiserror::Error;

/// Errors that can occur when constructing pagination parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageParamsError {
    #[error("Invalid page: page numbers start at 1")]
    ZeroPage,
    #[error("Invalid limit: must be between 1 and {max}")]
    LimitOutOfRange { max: u32 },
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Store call timed out after {0}")]
    Timeout(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Convenience constructor for a missing product.
    pub fn product_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Product",
            id: id.into(),
        }
    }

    /// Returns true if this error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

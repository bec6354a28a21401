//! Domain-level errors.
//!
//! These errors represent rule violations on the author record itself.
//! They are independent of infrastructure concerns (HTTP, gRPC, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Author with the given id does not exist
    #[error("author {0:?} does not exist")]
    NotFound(String),

    /// Author with the given id already exists
    #[error("author {0:?} already exists")]
    AlreadyExists(String),
}

impl DomainError {
    /// Create a not found error for an author id
    pub fn not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound(id.into())
    }

    /// Create an already-exists error for an author id
    pub fn already_exists(id: impl Into<String>) -> Self {
        DomainError::AlreadyExists(id.into())
    }
}

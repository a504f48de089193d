//! Domain errors - error types for the domain layer
//!
//! Repositories report absence through `Option`, so the error surface is
//! small: a uniqueness conflict on user subjects and opaque persistence
//! failures.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("A user already exists for this subject")]
    SubjectAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::SubjectAlreadyExists)
    }
}

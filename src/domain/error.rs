//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the hierarchy contract.
/// These are independent of transport and rendering concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("root person not found: {0}")]
    RootNotFound(String),

    #[error("cannot determine root: no person without supervisors")]
    NoRootCandidate,

    #[error("cannot determine root: multiple candidates: {0}")]
    AmbiguousRoot(String),

    #[error("invalid people listing: {0}")]
    InvalidListing(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

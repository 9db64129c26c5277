//! Domain validation errors

use thiserror::Error;

/// Errors raised while validating domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Relationship type cannot be embedded in a graph query
    #[error("Invalid relationship type: {0:?}")]
    InvalidRelationshipType(String),

    /// Case failed validation
    #[error("Invalid case: {0}")]
    InvalidCase(String),

    /// A stored attribute was missing or had the wrong type
    #[error("Missing or invalid attribute: {0}")]
    MissingAttribute(String),
}

//! Error taxonomy for the place data-access layer.
//!
//! Three shapes of failure leave the repository: required-field violations
//! (one `FieldError` per problem, reported together), a single structural
//! problem with caller input (`ValidationError`, e.g. a malformed or unknown
//! id), and unexpected storage faults (`DatabaseError`, opaque to callers).
//! `RepoError` tags the three so the transport layer can pattern-match
//! instead of inspecting error types.

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

const NOT_FOUND_MESSAGE: &str = "place not found";

/// A single required-field violation produced by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{field} is required"),
        }
    }
}

/// A single structural problem with caller input, surfaced unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_id() -> Self {
        Self::new("id", "invalid place ID format")
    }

    pub fn not_found() -> Self {
        Self::new("id", NOT_FOUND_MESSAGE)
    }

    pub fn is_not_found(&self) -> bool {
        self.message == NOT_FOUND_MESSAGE
    }
}

/// Storage operation a fault occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOperation {
    Fetch,
    Insert,
    Update,
    Delete,
}

impl DbOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbOperation::Fetch => "FETCH",
            DbOperation::Insert => "INSERT",
            DbOperation::Update => "UPDATE",
            DbOperation::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for DbOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unexpected storage-layer fault. The message carries no store internals;
/// the underlying cause is logged where the fault is caught.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DatabaseError {
    pub kind: DbOperation,
    pub message: String,
}

impl DatabaseError {
    pub fn new(kind: DbOperation, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Failure of a single repository operation.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Required-field violations; callers receive the full list at once.
    #[error("validation failed for {} field(s)", .0.len())]
    Fields(Vec<FieldError>),
    /// Malformed or unknown identifier.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Storage fault, surfaced opaque.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl RepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepoError::Validation(err) if err.is_not_found())
    }
}

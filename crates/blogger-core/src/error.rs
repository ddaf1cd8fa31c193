//! Domain-level error types.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {}", describe(.0))]
    Validation(Vec<FieldError>),

    #[error("Blog with id {0} not found")]
    BlogNotFound(Uuid),

    #[error("Post with id {0} not found")]
    PostNotFound(Uuid),

    #[error("Comment with id {0} not found")]
    CommentNotFound(Uuid),

    #[error("User with id {0} not found")]
    UserNotFound(Uuid),

    #[error("Bad request: {field}: {message}")]
    BadRequest { field: String, message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    /// Validation failure on a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Stored document is malformed: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = DomainError::Validation(vec![
            FieldError::new("title", "must not be blank"),
            FieldError::new("content", "too long"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: title: must not be blank, content: too long"
        );
    }

    #[test]
    fn test_not_found_variants_carry_id() {
        let id = Uuid::new_v4();
        let err = DomainError::PostNotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}

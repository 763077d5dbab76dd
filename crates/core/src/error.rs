//! Domain error model.

use thiserror::Error;

use crate::validation::FieldError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Transport
/// concerns (status codes, problem documents) belong to the API crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more field rules failed.
    #[error("validation failed: {}", join_messages(.0))]
    Validation(Vec<FieldError>),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. not a positive number).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Field errors carried by a validation failure (empty for other variants).
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            DomainError::Validation(errors) => errors,
            DomainError::InvariantViolation(_) | DomainError::InvalidId(_) => &[],
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display_lists_every_message() {
        let err = DomainError::validation(vec![
            FieldError::new("id", "Id must be a positive number"),
            FieldError::new("stock", "Stock cannot be negative"),
        ]);

        assert_eq!(
            err.to_string(),
            "validation failed: Id must be a positive number; Stock cannot be negative"
        );
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn invalid_id_has_no_field_errors() {
        let err = DomainError::invalid_id("ProductId: 0");
        assert!(err.field_errors().is_empty());
        assert_eq!(err.to_string(), "invalid identifier: ProductId: 0");
    }
}

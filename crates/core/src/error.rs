//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Nothing here
/// describes IO or storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value does not match its required format (e.g. a malformed DNI).
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = DomainError::invalid_format("DNI must have 9 characters");
        assert_eq!(err.to_string(), "invalid format: DNI must have 9 characters");

        let err = DomainError::invalid_id("Code: empty");
        assert_eq!(err.to_string(), "invalid identifier: Code: empty");
    }
}

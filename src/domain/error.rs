//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent contract violations on the pure data model.
/// These are independent of file and terminal concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("operation on empty word list")]
    EmptyList,

    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("category name must not be empty")]
    EmptyName,

    #[error("word must not contain a line break: {0:?}")]
    EmbeddedNewline(String),

    #[error("no token found in input")]
    EmptyInput,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

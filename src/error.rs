//! Error types for ranking operations.

use thiserror::Error;

/// Errors surfaced by container operations and ranking queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A caller-supplied parameter is outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Peek or remove was called on an empty heap.
    #[error("container is empty")]
    EmptyContainer,

    /// A document id or term was never registered with the engine.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

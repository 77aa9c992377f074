//! Graft query errors.

use thiserror::Error;

/// Recoverable failures of a graft query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraftError {
    /// The queried path or name does not occur in the graph.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The queried field has no declared type.
    #[error("No type for {0}")]
    NoType(String),

    /// The queried field declares more than one type.
    #[error("Found multiple types: {}", .0.join(", "))]
    MultipleTypes(Vec<String>),
}

//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the decision-tree structure.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("tree document is empty")]
    EmptyDocument,

    #[error("first line is neither a question nor a destination: {line:?}")]
    UnrecognizedRoot { line: String },

    #[error("tree is incomplete or malformed at {label:?}")]
    MalformedNode { label: String },

    #[error("cannot graft onto {label:?}: node is not a destination")]
    NotALeaf { label: String },
}

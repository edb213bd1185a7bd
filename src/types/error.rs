//! Error types for the social-graph library.

use thiserror::Error;

use crate::types::Member;

/// All errors that can occur in the social-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A query referenced a member that is not in the network.
    #[error("{0} is not a member of the social network")]
    MemberNotFound(Member),

    /// An edge removal targeted an edge with no remaining occurrence.
    #[error("no edge between {a} and {b}")]
    EdgeNotFound { a: Member, b: Member },

    /// The first line of an edge list did not parse as a count.
    #[error("expected a count on the first line, got {line:?}")]
    MalformedHeader { line: String },

    /// IO error while reading an edge list.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for social-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

//! Member identifier — the opaque token naming one node in the graph.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// A member of the social network.
///
/// Any non-empty token is a valid member name; the graph attaches no meaning
/// to the text beyond identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Member(String);

impl Member {
    /// Create a member from a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The member's token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Member {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Member {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// Lets maps keyed by Member be queried with a plain &str.
impl Borrow<str> for Member {
    fn borrow(&self) -> &str {
        &self.0
    }
}

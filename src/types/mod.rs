//! All data types for the social-graph library.

pub mod error;
pub mod member;

pub use error::{GraphError, GraphResult};
pub use member::Member;

/// Default number of entries in a least-connected ranking.
pub const DEFAULT_LEAST_CONNECTED_LIMIT: usize = 3;

//! social-graph — in-memory undirected social graph with neighbor analytics.
//!
//! Builds a graph of members and friendships from an edge-list text source
//! and answers small queries over it: adjacency listings, all-pairs
//! common-neighbor counts, per-member friend recommendations, friend counts,
//! and a least-connected ranking.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod ingest;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{Analytics, MatrixRow, RankedMember};
pub use graph::SocialGraph;
pub use ingest::{load_file, read_edge_list, IngestReport, MalformedLine};
pub use types::{GraphError, GraphResult, Member, DEFAULT_LEAST_CONNECTED_LIMIT};

//! In-memory graph operations — the core data structure.

pub mod social_graph;

pub use social_graph::SocialGraph;

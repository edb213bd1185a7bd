//! High-level operations — the analytics engine.

pub mod analytics;

pub use analytics::{Analytics, MatrixRow, RankedMember};

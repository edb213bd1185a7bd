//! CLI layer for the `sgraph` binary.

pub mod commands;

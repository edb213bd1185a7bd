//! Edge-list ingestion — turning a text source into graph edges.

pub mod reader;

pub use reader::{load_file, read_edge_list, IngestReport, MalformedLine};

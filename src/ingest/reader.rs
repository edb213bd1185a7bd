//! Edge-list reader.
//!
//! Format: the first line is a declared count (accepted, not validated
//! against the lines that follow); every subsequent non-blank line names one
//! edge as exactly two whitespace-separated tokens.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use crate::graph::SocialGraph;
use crate::types::{GraphError, GraphResult};

/// A line that did not parse into exactly two tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    /// 1-based line number within the source, counting the header line.
    pub line_number: usize,
    /// The offending line, trimmed.
    pub text: String,
}

/// Outcome of one ingestion pass.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    /// The count declared on the first line.
    pub declared: usize,
    /// Edges actually added to the graph.
    pub edges_added: usize,
    /// Lines skipped for having a token count other than two.
    pub malformed: Vec<MalformedLine>,
}

/// Read an edge list into `graph`, calling `add_edge` per line in file order.
///
/// Blank lines are skipped. Malformed lines are logged, recorded in the
/// report, and skipped; they never create members or edges, and ingestion
/// continues past them. Only a missing/unparseable header or an IO failure
/// aborts the pass.
pub fn read_edge_list<R: BufRead>(reader: R, graph: &mut SocialGraph) -> GraphResult<IngestReport> {
    let mut lines = reader.lines();
    let header = lines.next().transpose()?.unwrap_or_default();
    let declared = header
        .trim()
        .parse::<usize>()
        .map_err(|_| GraphError::MalformedHeader {
            line: header.trim().to_string(),
        })?;

    let mut report = IngestReport {
        declared,
        edges_added: 0,
        malformed: Vec::new(),
    };

    for (idx, line) in lines.enumerate() {
        let line = line?;
        let line_number = idx + 2; // the header was line 1
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(u), Some(v), None) => {
                graph.add_edge(u, v);
                report.edges_added += 1;
            }
            _ => {
                warn!("line {line_number} {trimmed:?} has an incorrect format");
                report.malformed.push(MalformedLine {
                    line_number,
                    text: trimmed.to_string(),
                });
            }
        }
    }

    debug!(
        "ingested {} edges ({} declared, {} malformed lines)",
        report.edges_added,
        report.declared,
        report.malformed.len()
    );
    Ok(report)
}

/// Read an edge list from a file on disk.
pub fn load_file(path: &Path, graph: &mut SocialGraph) -> GraphResult<IngestReport> {
    let file = File::open(path)?;
    read_edge_list(BufReader::new(file), graph)
}

//! Core data structures for pipeline graphs

use serde::{Deserialize, Serialize};

/// A pipeline node. Only the identifier matters to analysis; any other
/// attributes a caller attaches are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
}

/// A directed edge between two node identifiers. Presence of `(a, b)` does
/// not imply `(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// The decoded payload shape: a node set plus an edge sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// What the caller gets back for a well-formed pipeline.
///
/// `num_nodes` and `num_edges` count the input exactly as supplied:
/// duplicates are counted, and an edge endpoint missing from the node list is
/// traversed for cycle detection but not added to `num_nodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

//! Graph builder — adjacency representation keyed by node identifier

use std::collections::HashMap;

use crate::detect::CycleDetector;
use crate::model::{Edge, Node};

/// A directed pipeline graph. Built fresh per request and discarded after;
/// nothing here is cached or shared.
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: HashMap<String, Vec<String>>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.nodes.len())
            .field("edge_count", &self.edges.len())
            .finish()
    }
}

impl Graph {
    /// Build a graph from the supplied node and edge lists.
    ///
    /// Edges are grouped by source in the order they were supplied, so each
    /// successor list preserves declaration order. Edge endpoints are not
    /// checked against the node list; dangling identifiers are legal input.
    pub fn build(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
        for edge in &edges {
            adjacency
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
        }
        Graph {
            nodes,
            edges,
            adjacency,
        }
    }

    /// Number of declared nodes, duplicates included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of supplied edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over node identifiers in declaration order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Direct successors of `id` in edge-supply order. An identifier with no
    /// outgoing edges (declared or not) yields an empty slice.
    pub fn successors(&self, id: &str) -> &[String] {
        match self.adjacency.get(id) {
            Some(targets) => targets,
            None => &[],
        }
    }

    /// True iff the graph contains no directed cycle.
    pub fn is_dag(&self) -> bool {
        CycleDetector::new(self).is_dag()
    }
}

//! The single public operation: raw payload in, report or typed error out

use thiserror::Error;

use crate::graph::Graph;
use crate::model::{AnalysisReport, Pipeline};

/// Why a payload was rejected. Traversal itself cannot fail, so these are the
/// only error kinds the core produces.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The payload is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    /// The payload is JSON but does not have the `nodes`/`edges` shape.
    #[error("not a pipeline description: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Decode `raw` as a pipeline and analyze it.
///
/// Pure and stateless: the same payload always yields the same result, and
/// every failure comes back as a value — nothing panics across this boundary.
pub fn analyze(raw: &str) -> Result<AnalysisReport, AnalyzeError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(AnalyzeError::Decode)?;
    let pipeline: Pipeline = serde_json::from_value(value).map_err(AnalyzeError::Shape)?;
    Ok(analyze_pipeline(pipeline))
}

/// Analyze an already-decoded pipeline. Infallible: dangling edge endpoints
/// are traversed, not rejected.
pub fn analyze_pipeline(pipeline: Pipeline) -> AnalysisReport {
    let num_nodes = pipeline.nodes.len();
    let num_edges = pipeline.edges.len();
    let graph = Graph::build(pipeline.nodes, pipeline.edges);
    AnalysisReport {
        num_nodes,
        num_edges,
        is_dag: graph.is_dag(),
    }
}

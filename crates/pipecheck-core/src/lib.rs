//! Pipecheck Core — pipeline graph model, builder, and cycle detection

pub mod model;
pub mod graph;
pub mod detect;
pub mod analyze;


pub use model::{Node, Edge, Pipeline, AnalysisReport};
pub use graph::Graph;
pub use detect::CycleDetector;
pub use analyze::{analyze, analyze_pipeline, AnalyzeError};

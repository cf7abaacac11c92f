use crate::segments::SegmentStrategy;
use serde::Serialize;

/// Vertex adjacency assembly summary.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStage {
    pub strategy: SegmentStrategy,
    /// Distance below which two vertices are joined (the cell diagonal).
    pub threshold: f64,
    pub vertices: usize,
    pub edges: usize,
    pub elapsed_ms: f64,
}

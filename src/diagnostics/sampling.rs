use crate::grid::CartesianGrid;
use serde::Serialize;

/// Dense field sampling summary.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingStage {
    pub grid: CartesianGrid,
    pub iso: f64,
    pub nodes: usize,
    /// Nodes whose shifted value is negative.
    pub negative_nodes: usize,
    pub elapsed_ms: f64,
}

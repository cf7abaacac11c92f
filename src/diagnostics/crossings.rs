use crate::crossing::{Axis, Crossing};
use serde::Serialize;

/// Sign changes found by the two sweeps.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossingStage {
    pub x_sweep: usize,
    pub y_sweep: usize,
    pub elapsed_ms: f64,
}

impl CrossingStage {
    pub fn from_crossings(crossings: &[Crossing], elapsed_ms: f64) -> Self {
        let x_sweep = crossings.iter().filter(|c| c.axis == Axis::X).count();
        Self {
            x_sweep,
            y_sweep: crossings.len() - x_sweep,
            elapsed_ms,
        }
    }

    pub fn total(&self) -> usize {
        self.x_sweep + self.y_sweep
    }
}

use crate::refine::{RefineOptions, RefinedVertices};
use serde::Serialize;

/// Bisection statistics over every bracket of one extraction.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineStage {
    pub options: RefineOptions,
    pub brackets: usize,
    pub iterations: usize,
    /// Brackets stopped by `max_iter` before reaching `eps`.
    pub exhausted: usize,
    pub elapsed_ms: f64,
}

impl RefineStage {
    pub fn new(options: &RefineOptions, refined: &RefinedVertices, elapsed_ms: f64) -> Self {
        Self {
            options: options.clone(),
            brackets: refined.vertices.len(),
            iterations: refined.iterations,
            exhausted: refined.exhausted,
            elapsed_ms,
        }
    }

    pub fn mean_iterations(&self) -> f64 {
        if self.brackets == 0 {
            0.0
        } else {
            self.iterations as f64 / self.brackets as f64
        }
    }
}

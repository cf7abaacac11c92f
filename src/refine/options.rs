//! Convergence policy for the bisection root refiner.

use serde::{Deserialize, Serialize};

/// Parameters controlling bisection along a bracketing grid segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineOptions {
    /// Bisection stops once the bracket is no wider than this.
    pub eps: f64,
    /// Hard cap on bisection steps per bracket. Guarantees termination when
    /// `eps` is below the float spacing of the bracket or the field is
    /// inconsistent between calls.
    pub max_iter: usize,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_iter: 1000,
        }
    }
}

impl RefineOptions {
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }
}

//! Sign-change detection over a sampled grid.
//!
//! Two independent sweeps walk the [`SampleBuffer`]: the x-sweep compares
//! nodes `(i, j)` and `(i + 1, j)`, the y-sweep compares `(i, j)` and
//! `(i, j + 1)`. Both iterate with `i` as the outer loop. Each adjacent pair
//! whose shifted values straddle zero becomes a [`Crossing`], the bracket
//! handed to the root refiner.
//!
//! Zero is classified as non-negative, so two adjacent zeros never form a
//! crossing while a zero next to a negative value does.

use crate::grid::{CartesianGrid, SampleBuffer};
use serde::Serialize;

/// Axis along which a bracket varies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A grid-line segment whose endpoints carry opposite-sign samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub axis: Axis,
    /// Grid index of the lower endpoint.
    pub node: (usize, usize),
    /// Coordinate held constant along the bracket.
    pub fixed: f64,
    /// Varying coordinate at the lower and upper endpoint.
    pub lo: f64,
    pub hi: f64,
    /// Shifted samples at `lo` and `hi`.
    pub v_lo: f64,
    pub v_hi: f64,
}

impl Crossing {
    /// Map a coordinate along the varying axis back to the plane.
    #[inline]
    pub fn point_at(&self, t: f64) -> nalgebra::Point2<f64> {
        match self.axis {
            Axis::X => nalgebra::Point2::new(t, self.fixed),
            Axis::Y => nalgebra::Point2::new(self.fixed, t),
        }
    }
}

/// `true` when exactly one of `v1`, `v2` is negative.
#[inline]
pub fn have_opposite_signs(v1: f64, v2: f64) -> bool {
    (v1 >= 0.0 && v2 < 0.0) || (v1 < 0.0 && v2 >= 0.0)
}

/// Run the x-sweep followed by the y-sweep.
pub fn detect_crossings(grid: &CartesianGrid, samples: &SampleBuffer) -> Vec<Crossing> {
    let mut out = Vec::new();
    sweep_x(grid, samples, &mut out);
    sweep_y(grid, samples, &mut out);
    out
}

fn sweep_x(grid: &CartesianGrid, samples: &SampleBuffer, out: &mut Vec<Crossing>) {
    for i in 0..grid.nx.saturating_sub(1) {
        for j in 0..grid.ny {
            let v1 = samples.get(i, j);
            let v2 = samples.get(i + 1, j);
            if have_opposite_signs(v1, v2) {
                out.push(Crossing {
                    axis: Axis::X,
                    node: (i, j),
                    fixed: grid.y(j),
                    lo: grid.x(i),
                    hi: grid.x(i + 1),
                    v_lo: v1,
                    v_hi: v2,
                });
            }
        }
    }
}

fn sweep_y(grid: &CartesianGrid, samples: &SampleBuffer, out: &mut Vec<Crossing>) {
    for i in 0..grid.nx {
        for j in 0..grid.ny.saturating_sub(1) {
            let v1 = samples.get(i, j);
            let v2 = samples.get(i, j + 1);
            if have_opposite_signs(v1, v2) {
                out.push(Crossing {
                    axis: Axis::Y,
                    node: (i, j),
                    fixed: grid.x(i),
                    lo: grid.y(j),
                    hi: grid.y(j + 1),
                    v_lo: v1,
                    v_hi: v2,
                });
            }
        }
    }
}

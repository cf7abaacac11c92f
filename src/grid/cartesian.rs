use crate::error::IsolineError;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Regular Cartesian sampling grid.
///
/// Nodes sit at `(x0 + i·dx, y0 + j·dy)` for `i < nx`, `j < ny`. A valid grid
/// has at least two nodes along each axis so that a sign change can be
/// bracketed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartesianGrid {
    pub nx: usize,
    pub ny: usize,
    pub x0: f64,
    pub dx: f64,
    pub y0: f64,
    pub dy: f64,
}

impl CartesianGrid {
    /// Build a grid with explicit per-axis resolution.
    pub fn new(
        nx: usize,
        ny: usize,
        x0: f64,
        dx: f64,
        y0: f64,
        dy: f64,
    ) -> Result<Self, IsolineError> {
        let grid = Self {
            nx,
            ny,
            x0,
            dx,
            y0,
            dy,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Check the `nx ≥ 2 ∧ ny ≥ 2` invariant.
    ///
    /// The fields are public, so entry points accepting a raw grid call this
    /// before touching the field.
    pub fn validate(&self) -> Result<(), IsolineError> {
        if self.nx < 2 || self.ny < 2 {
            return Err(IsolineError::InvalidGrid {
                nx: self.nx,
                ny: self.ny,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn x(&self, i: usize) -> f64 {
        self.x0 + i as f64 * self.dx
    }

    #[inline]
    pub fn y(&self, j: usize) -> f64 {
        self.y0 + j as f64 * self.dy
    }

    /// Coordinate of node `(i, j)`.
    #[inline]
    pub fn node(&self, i: usize, j: usize) -> Point2<f64> {
        Point2::new(self.x(i), self.y(j))
    }

    pub fn node_count(&self) -> usize {
        self.nx * self.ny
    }

    /// Length of a cell diagonal, the vertex adjacency threshold.
    pub fn cell_diagonal(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Generate a grid with square cells centred on `[x1,x2] × [y1,y2]`.
///
/// The x axis drives the step: `n` (clamped to at least 2) nodes span
/// `[x1, x2]` exactly. The y axis reuses the same step, takes as many nodes as
/// fit `[y1, y2]` (at least 2), and is re-centred on the interval midpoint.
/// Use [`CartesianGrid::new`] for independent per-axis resolution.
pub fn symmetric_grid(x1: f64, x2: f64, y1: f64, y2: f64, n: usize) -> CartesianGrid {
    let nx = n.max(2);
    let dx = (x2 - x1) / (nx - 1) as f64;
    let (y0, dy, ny) = centered_axis(y1, y2, dx);
    CartesianGrid {
        nx,
        ny,
        x0: x1,
        dx,
        y0,
        dy,
    }
}

/// Domain bounds plus x subdivision count, the inputs of [`symmetric_grid`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    pub n: usize,
}

impl From<GridBounds> for CartesianGrid {
    fn from(b: GridBounds) -> Self {
        symmetric_grid(b.x1, b.x2, b.y1, b.y2, b.n)
    }
}

fn centered_axis(y1: f64, y2: f64, step: f64) -> (f64, f64, usize) {
    let span = ((y2 - y1) / step).round();
    // A zero step (x1 == x2) gives an infinite or NaN span.
    let ny = if span.is_finite() && span > 0.0 {
        (span as usize).saturating_add(1).max(2)
    } else {
        2
    };
    let y0 = (y1 + y2 - (ny - 1) as f64 * step) / 2.0;
    (y0, step, ny)
}

//! Isoline extractor orchestrating the sampling → sweep → bisection →
//! adjacency pipeline.
//!
//! Modules
//! - [`params`] – policy knobs: bisection tolerance and cap, segment search
//!   strategy, Rayon thresholds.
//! - `pipeline` – the [`IsolineExtractor`] implementation.
//!
//! Key Ideas
//! - The field is sampled once per node; bisection re-evaluates it only along
//!   bracketing grid lines.
//! - A vertex found independently by both sweeps (a zero exactly on a node)
//!   is reported twice. Nothing is deduplicated.
//! - Edges join vertices strictly closer than the cell diagonal. The edge set
//!   is not an ordered polyline and may contain several components.

pub mod params;
mod pipeline;

pub use params::{IsolineParams, ParallelOptions};
pub use pipeline::IsolineExtractor;

use crate::error::IsolineError;
use crate::field::FieldFn;
use crate::grid::CartesianGrid;
use crate::types::Isoline;
use nalgebra::Point2;

/// Extract the `iso` level curve of a plain closure with default parameters.
pub fn isoline_cartesian<C, F>(
    grid: &CartesianGrid,
    field: F,
    ctx: &C,
    iso: f64,
) -> Result<Isoline, IsolineError>
where
    C: ?Sized,
    F: Fn(&Point2<f64>, &C) -> f64,
{
    IsolineExtractor::default().extract(grid, &FieldFn(field), ctx, iso)
}

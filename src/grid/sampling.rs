//! Dense node sampling of the shifted field `f(x, y) - iso`.
//!
//! Values are stored row-major by x index: node `(i, j)` lives at
//! `i * ny + j`, so one "row" holds every y sample of a single x column.
use super::cartesian::CartesianGrid;
use crate::error::IsolineError;
use crate::field::ScalarField;

/// Owned `nx × ny` buffer of shifted field samples.
#[derive(Clone, Debug)]
pub struct SampleBuffer {
    /// Nodes along x
    pub nx: usize,
    /// Nodes along y
    pub ny: usize,
    /// Backing storage, `i * ny + j`
    pub data: Vec<f64>,
}

impl SampleBuffer {
    /// Construct a zero-initialized buffer of `nx × ny` samples.
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            nx,
            ny,
            data: vec![0.0; nx * ny],
        }
    }
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        i * self.ny + j
    }
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.idx(i, j)]
    }
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, v: f64) {
        let k = self.idx(i, j);
        self.data[k] = v;
    }
}

/// Evaluate `field - iso` at every node of `grid`, in row-major order.
///
/// Stops at the first failing node.
pub fn sample_field<C, F>(
    grid: &CartesianGrid,
    field: &F,
    ctx: &C,
    iso: f64,
) -> Result<SampleBuffer, IsolineError>
where
    C: ?Sized,
    F: ScalarField<C> + ?Sized,
{
    grid.validate()?;
    let mut buf = SampleBuffer::new(grid.nx, grid.ny);
    for (i, row) in buf.data.chunks_mut(grid.ny).enumerate() {
        sample_row(grid, field, ctx, iso, i, row)?;
    }
    Ok(buf)
}

/// Row-parallel variant of [`sample_field`].
///
/// Every row is sampled even when one fails; the reported error is the one
/// of the first failing node in row-major order, matching the sequential
/// path.
#[cfg(feature = "parallel")]
pub fn sample_field_parallel<C, F>(
    grid: &CartesianGrid,
    field: &F,
    ctx: &C,
    iso: f64,
) -> Result<SampleBuffer, IsolineError>
where
    C: ?Sized + Sync,
    F: ScalarField<C> + ?Sized + Sync,
{
    use rayon::prelude::*;

    grid.validate()?;
    let mut buf = SampleBuffer::new(grid.nx, grid.ny);
    let rows: Vec<Result<(), IsolineError>> = buf
        .data
        .par_chunks_mut(grid.ny)
        .enumerate()
        .map(|(i, row)| sample_row(grid, field, ctx, iso, i, row))
        .collect();
    rows.into_iter().collect::<Result<(), _>>()?;
    Ok(buf)
}

fn sample_row<C, F>(
    grid: &CartesianGrid,
    field: &F,
    ctx: &C,
    iso: f64,
    i: usize,
    row: &mut [f64],
) -> Result<(), IsolineError>
where
    C: ?Sized,
    F: ScalarField<C> + ?Sized,
{
    for (j, slot) in row.iter_mut().enumerate() {
        let p = grid.node(i, j);
        let v = field
            .value(&p, ctx)
            .map_err(|e| IsolineError::field(p, e))?;
        *slot = v - iso;
    }
    Ok(())
}

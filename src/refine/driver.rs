use super::bisect::{bisect_root, RootEstimate};
use super::options::RefineOptions;
use crate::crossing::Crossing;
use crate::error::IsolineError;
use crate::field::ScalarField;
use crate::types::Vertex;

/// Vertices refined from a batch of crossings, in crossing order.
#[derive(Clone, Debug, Default)]
pub struct RefinedVertices {
    pub vertices: Vec<Vertex>,
    /// Total bisection steps across all brackets.
    pub iterations: usize,
    /// Brackets stopped by the iteration cap instead of the tolerance.
    pub exhausted: usize,
}

impl RefinedVertices {
    fn with_capacity(n: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(n),
            iterations: 0,
            exhausted: 0,
        }
    }

    fn push(&mut self, crossing: &Crossing, est: RootEstimate) {
        self.vertices.push(crossing.point_at(est.root));
        self.iterations += est.iterations;
        if !est.converged {
            self.exhausted += 1;
        }
    }
}

/// Refine one crossing against the shifted field.
pub fn refine_crossing<C, F>(
    crossing: &Crossing,
    field: &F,
    ctx: &C,
    iso: f64,
    opts: &RefineOptions,
) -> Result<RootEstimate, IsolineError>
where
    C: ?Sized,
    F: ScalarField<C> + ?Sized,
{
    bisect_root(crossing, opts, |t| {
        let p = crossing.point_at(t);
        field
            .value(&p, ctx)
            .map(|v| v - iso)
            .map_err(|e| IsolineError::field(p, e))
    })
}

/// Refine every crossing sequentially and collect the resulting vertices.
pub fn collect_vertices<C, F>(
    crossings: &[Crossing],
    field: &F,
    ctx: &C,
    iso: f64,
    opts: &RefineOptions,
) -> Result<RefinedVertices, IsolineError>
where
    C: ?Sized,
    F: ScalarField<C> + ?Sized,
{
    let mut out = RefinedVertices::with_capacity(crossings.len());
    for crossing in crossings {
        let est = refine_crossing(crossing, field, ctx, iso, opts)?;
        out.push(crossing, est);
    }
    Ok(out)
}

/// Refine crossings with Rayon, one task per crossing.
///
/// Output order and the reported error match [`collect_vertices`].
#[cfg(feature = "parallel")]
pub fn collect_vertices_parallel<C, F>(
    crossings: &[Crossing],
    field: &F,
    ctx: &C,
    iso: f64,
    opts: &RefineOptions,
) -> Result<RefinedVertices, IsolineError>
where
    C: ?Sized + Sync,
    F: ScalarField<C> + ?Sized + Sync,
{
    use rayon::prelude::*;

    let estimates: Vec<Result<RootEstimate, IsolineError>> = crossings
        .par_iter()
        .map(|crossing| refine_crossing(crossing, field, ctx, iso, opts))
        .collect();

    let mut out = RefinedVertices::with_capacity(crossings.len());
    for (crossing, est) in crossings.iter().zip(estimates) {
        out.push(crossing, est?);
    }
    Ok(out)
}

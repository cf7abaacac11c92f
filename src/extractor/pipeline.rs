//! Extraction pipeline driving an isoline query end-to-end.
//!
//! [`IsolineExtractor`] runs the stages strictly in order: sample the shifted
//! field on every node, sweep rows then columns for sign changes, bisect each
//! bracket to a vertex, and join vertices closer than the cell diagonal.
//! The sample buffer is fully populated before the sweeps read it, which is
//! the only synchronization point the Rayon path needs.
//!
//! Typical usage:
//! ```
//! use isoline2d::{symmetric_grid, FieldFn, IsolineExtractor, IsolineParams};
//! use nalgebra::Point2;
//!
//! let grid = symmetric_grid(-2.0, 2.0, -2.0, 2.0, 50);
//! let circle = FieldFn(|p: &Point2<f64>, r: &f64| p.x * p.x + p.y * p.y - r * r);
//! let extractor = IsolineExtractor::new(IsolineParams::default());
//! let isoline = extractor.extract(&grid, &circle, &1.0, 0.0).unwrap();
//! assert!(!isoline.is_empty());
//! ```
use super::params::IsolineParams;
use crate::crossing::{detect_crossings, Crossing};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    CrossingStage, ExtractionReport, ExtractionTrace, RefineStage, SamplingStage, SegmentStage,
    TimingBreakdown,
};
use crate::error::IsolineError;
use crate::field::ScalarField;
use crate::grid::{sample_field, CartesianGrid, SampleBuffer};
use crate::refine::{collect_vertices, RefineOptions, RefinedVertices};
use crate::segments::{build_segments, SegmentStrategy};
use crate::types::{Edge, Isoline, Vertex};
use log::{debug, warn};
use std::time::Instant;

/// Isoline extractor holding the convergence and assembly policy.
#[derive(Clone, Debug, Default)]
pub struct IsolineExtractor {
    params: IsolineParams,
}

impl IsolineExtractor {
    /// Create an extractor with the supplied parameters.
    pub fn new(params: IsolineParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IsolineParams {
        &self.params
    }

    /// Extract the `iso` level curve of `field` over `grid`.
    pub fn extract<C, F>(
        &self,
        grid: &CartesianGrid,
        field: &F,
        ctx: &C,
        iso: f64,
    ) -> Result<Isoline, IsolineError>
    where
        C: ?Sized,
        F: ScalarField<C> + ?Sized,
    {
        Ok(self.extract_with_diagnostics(grid, field, ctx, iso)?.isoline)
    }

    /// Extract and return both the isoline and a per-stage trace.
    pub fn extract_with_diagnostics<C, F>(
        &self,
        grid: &CartesianGrid,
        field: &F,
        ctx: &C,
        iso: f64,
    ) -> Result<ExtractionReport, IsolineError>
    where
        C: ?Sized,
        F: ScalarField<C> + ?Sized,
    {
        self.run(grid, iso, &Sequential { field, ctx })
    }

    /// Rayon-backed [`extract`](Self::extract). Same output, bit for bit.
    #[cfg(feature = "parallel")]
    pub fn extract_par<C, F>(
        &self,
        grid: &CartesianGrid,
        field: &F,
        ctx: &C,
        iso: f64,
    ) -> Result<Isoline, IsolineError>
    where
        C: ?Sized + Sync,
        F: ScalarField<C> + ?Sized + Sync,
    {
        Ok(self.extract_par_with_diagnostics(grid, field, ctx, iso)?.isoline)
    }

    /// Rayon-backed [`extract_with_diagnostics`](Self::extract_with_diagnostics).
    #[cfg(feature = "parallel")]
    pub fn extract_par_with_diagnostics<C, F>(
        &self,
        grid: &CartesianGrid,
        field: &F,
        ctx: &C,
        iso: f64,
    ) -> Result<ExtractionReport, IsolineError>
    where
        C: ?Sized + Sync,
        F: ScalarField<C> + ?Sized + Sync,
    {
        let stages = parallel::Parallel {
            field,
            ctx,
            opts: self.params.parallel,
        };
        self.run(grid, iso, &stages)
    }

    fn run<S: Stages>(
        &self,
        grid: &CartesianGrid,
        iso: f64,
        stages: &S,
    ) -> Result<ExtractionReport, IsolineError> {
        grid.validate()?;
        debug!(
            "IsolineExtractor::extract start nx={} ny={} iso={} parallel={}",
            grid.nx,
            grid.ny,
            iso,
            stages.is_parallel()
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let stage_start = Instant::now();
        let samples = stages.sample(grid, iso)?;
        let sampling_ms = elapsed_ms(stage_start);
        timings.push("sampling", sampling_ms);
        let sampling = SamplingStage {
            grid: *grid,
            iso,
            nodes: samples.data.len(),
            negative_nodes: samples.data.iter().filter(|v| **v < 0.0).count(),
            elapsed_ms: sampling_ms,
        };

        let stage_start = Instant::now();
        let crossings = detect_crossings(grid, &samples);
        drop(samples);
        let crossing_ms = elapsed_ms(stage_start);
        timings.push("crossings", crossing_ms);
        let crossing_stage = CrossingStage::from_crossings(&crossings, crossing_ms);
        debug!(
            "IsolineExtractor::extract crossings x={} y={}",
            crossing_stage.x_sweep, crossing_stage.y_sweep
        );

        let stage_start = Instant::now();
        let refine_opts = &self.params.refine;
        let refined = stages.refine(&crossings, iso, refine_opts)?;
        let refine_ms = elapsed_ms(stage_start);
        timings.push("refine", refine_ms);
        if refined.exhausted > 0 {
            warn!(
                "IsolineExtractor::extract {} of {} brackets hit max_iter={} before eps={}",
                refined.exhausted,
                crossings.len(),
                refine_opts.max_iter,
                refine_opts.eps
            );
        }
        let refine_stage = RefineStage::new(refine_opts, &refined, refine_ms);

        let stage_start = Instant::now();
        let threshold = grid.cell_diagonal();
        let strategy = self.params.segments;
        let vertices = refined.vertices;
        let edges = stages.segments(&vertices, threshold, strategy);
        let segment_ms = elapsed_ms(stage_start);
        timings.push("segments", segment_ms);
        let segment_stage = SegmentStage {
            strategy,
            threshold,
            vertices: vertices.len(),
            edges: edges.len(),
            elapsed_ms: segment_ms,
        };

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "IsolineExtractor::extract done vertices={} edges={} total_ms={:.3}",
            vertices.len(),
            edges.len(),
            timings.total_ms
        );

        Ok(ExtractionReport {
            isoline: Isoline { vertices, edges },
            trace: ExtractionTrace {
                parallel: stages.is_parallel(),
                sampling,
                crossings: crossing_stage,
                refine: refine_stage,
                segments: segment_stage,
                timings,
            },
        })
    }
}

/// Execution backend for the stages that touch the field or scale with the
/// output size.
trait Stages {
    fn is_parallel(&self) -> bool;

    fn sample(&self, grid: &CartesianGrid, iso: f64) -> Result<SampleBuffer, IsolineError>;

    fn refine(
        &self,
        crossings: &[Crossing],
        iso: f64,
        opts: &RefineOptions,
    ) -> Result<RefinedVertices, IsolineError>;

    fn segments(&self, vertices: &[Vertex], threshold: f64, strategy: SegmentStrategy)
        -> Vec<Edge>;
}

struct Sequential<'a, F: ?Sized, C: ?Sized> {
    field: &'a F,
    ctx: &'a C,
}

impl<F, C> Stages for Sequential<'_, F, C>
where
    C: ?Sized,
    F: ScalarField<C> + ?Sized,
{
    fn is_parallel(&self) -> bool {
        false
    }

    fn sample(&self, grid: &CartesianGrid, iso: f64) -> Result<SampleBuffer, IsolineError> {
        sample_field(grid, self.field, self.ctx, iso)
    }

    fn refine(
        &self,
        crossings: &[Crossing],
        iso: f64,
        opts: &RefineOptions,
    ) -> Result<RefinedVertices, IsolineError> {
        collect_vertices(crossings, self.field, self.ctx, iso, opts)
    }

    fn segments(
        &self,
        vertices: &[Vertex],
        threshold: f64,
        strategy: SegmentStrategy,
    ) -> Vec<Edge> {
        build_segments(vertices, threshold, strategy)
    }
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::super::params::ParallelOptions;
    use super::Stages;
    use crate::crossing::Crossing;
    use crate::error::IsolineError;
    use crate::field::ScalarField;
    use crate::grid::{sample_field, sample_field_parallel, CartesianGrid, SampleBuffer};
    use crate::refine::{collect_vertices, collect_vertices_parallel, RefineOptions, RefinedVertices};
    use crate::segments::{build_segments, build_segments_parallel, SegmentStrategy};
    use crate::types::{Edge, Vertex};

    pub(super) struct Parallel<'a, F: ?Sized, C: ?Sized> {
        pub field: &'a F,
        pub ctx: &'a C,
        pub opts: ParallelOptions,
    }

    impl<F, C> Stages for Parallel<'_, F, C>
    where
        C: ?Sized + Sync,
        F: ScalarField<C> + ?Sized + Sync,
    {
        fn is_parallel(&self) -> bool {
            self.opts.enabled
        }

        fn sample(&self, grid: &CartesianGrid, iso: f64) -> Result<SampleBuffer, IsolineError> {
            if self.opts.should_parallelize(grid.nx) {
                sample_field_parallel(grid, self.field, self.ctx, iso)
            } else {
                sample_field(grid, self.field, self.ctx, iso)
            }
        }

        fn refine(
            &self,
            crossings: &[Crossing],
            iso: f64,
            opts: &RefineOptions,
        ) -> Result<RefinedVertices, IsolineError> {
            if self.opts.should_parallelize(crossings.len()) {
                collect_vertices_parallel(crossings, self.field, self.ctx, iso, opts)
            } else {
                collect_vertices(crossings, self.field, self.ctx, iso, opts)
            }
        }

        fn segments(
            &self,
            vertices: &[Vertex],
            threshold: f64,
            strategy: SegmentStrategy,
        ) -> Vec<Edge> {
            if self.opts.should_parallelize(vertices.len()) {
                build_segments_parallel(vertices, threshold, strategy)
            } else {
                build_segments(vertices, threshold, strategy)
            }
        }
    }
}

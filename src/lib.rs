#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod extractor;
pub mod field;
pub mod grid;
pub mod types;

// Stage-level building blocks, public for tooling and tests.
pub mod crossing;
pub mod refine;
pub mod segments;

// JSON run configuration for the demo binary.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: extractor + results.
pub use crate::extractor::{isoline_cartesian, IsolineExtractor, IsolineParams, ParallelOptions};
pub use crate::types::{Edge, Isoline, Vertex};

// Grid construction and the field callback contract.
pub use crate::field::{FieldFn, ScalarField};
pub use crate::grid::{symmetric_grid, CartesianGrid, GridBounds};

pub use crate::diagnostics::{ExtractionReport, ExtractionTrace};
pub use crate::error::IsolineError;
pub use crate::refine::RefineOptions;
pub use crate::segments::SegmentStrategy;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use isoline2d::prelude::*;
/// use nalgebra::Point2;
///
/// let grid = symmetric_grid(-1.0, 1.0, -1.0, 1.0, 3);
/// let iso = isoline_cartesian(&grid, |p: &Point2<f64>, _: &()| p.x + p.y, &(), 0.0).unwrap();
/// println!("vertices={} edges={}", iso.vertices.len(), iso.edges.len());
/// ```
pub mod prelude {
    pub use crate::{
        isoline_cartesian, symmetric_grid, CartesianGrid, FieldFn, Isoline, IsolineError,
        IsolineExtractor, IsolineParams, ScalarField,
    };
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::crossing::{detect_crossings, have_opposite_signs, Axis, Crossing};
    pub use crate::grid::{sample_field, SampleBuffer};
    pub use crate::refine::{
        bisect_root, collect_vertices, internal_division, refine_crossing, RefinedVertices,
        RootEstimate,
    };
    pub use crate::segments::{build_segments, is_adjacent};

    #[cfg(feature = "parallel")]
    pub use crate::grid::sample_field_parallel;
    #[cfg(feature = "parallel")]
    pub use crate::refine::collect_vertices_parallel;
    #[cfg(feature = "parallel")]
    pub use crate::segments::build_segments_parallel;
}

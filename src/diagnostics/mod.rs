//! Diagnostics data model returned alongside an extracted isoline.
//!
//! [`ExtractionReport`] is the entry point: it bundles the
//! [`Isoline`](crate::types::Isoline) with an [`ExtractionTrace`] holding one record
//! per pipeline stage plus the stage timings. Everything serializes to JSON
//! for the demo tooling.

pub mod crossings;
pub mod pipeline;
pub mod refine;
pub mod sampling;
pub mod segments;
pub mod timing;

pub use crossings::CrossingStage;
pub use pipeline::{ExtractionReport, ExtractionTrace};
pub use refine::RefineStage;
pub use sampling::SamplingStage;
pub use segments::SegmentStage;
pub use timing::{StageTiming, TimingBreakdown};

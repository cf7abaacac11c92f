use super::{CrossingStage, RefineStage, SamplingStage, SegmentStage, TimingBreakdown};
use crate::types::Isoline;
use serde::Serialize;

/// Result produced by
/// [`IsolineExtractor::extract_with_diagnostics`](crate::IsolineExtractor).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub isoline: Isoline,
    pub trace: ExtractionTrace,
}

/// Per-stage record of one extraction.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionTrace {
    pub parallel: bool,
    pub sampling: SamplingStage,
    pub crossings: CrossingStage,
    pub refine: RefineStage,
    pub segments: SegmentStage,
    pub timings: TimingBreakdown,
}

//! Parameter types configuring the extraction pipeline.
//!
//! The iso-value is a per-query argument; everything here is policy that is
//! typically fixed for a batch of queries. All structs deserialize with
//! defaults for missing fields, so a JSON config may name only what it
//! overrides.

use crate::refine::RefineOptions;
use crate::segments::SegmentStrategy;
use serde::{Deserialize, Serialize};

/// Extractor-wide parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsolineParams {
    /// Bisection tolerance and iteration cap.
    pub refine: RefineOptions,
    /// Pair search used when joining vertices into edges.
    pub segments: SegmentStrategy,
    /// Thresholds for the Rayon-backed entry points.
    pub parallel: ParallelOptions,
}

/// Controls whether stages of [`extract_par`](super::IsolineExtractor) fan
/// out to Rayon or stay on the calling thread.
///
/// Each stage compares its own work size (grid rows, crossings, vertices)
/// against `min_work_items`; small stages run sequentially to avoid the
/// scheduling overhead. Results are identical either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelOptions {
    pub enabled: bool,
    pub min_work_items: usize,
}

impl ParallelOptions {
    /// Construct explicit options.
    pub fn new(enabled: bool, min_work_items: usize) -> Self {
        Self {
            enabled,
            min_work_items: min_work_items.max(1),
        }
    }

    /// Keep every stage on the calling thread.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_work_items: usize::MAX,
        }
    }

    /// Returns true when a stage with `work_items` units should use Rayon.
    pub fn should_parallelize(&self, work_items: usize) -> bool {
        self.enabled && work_items >= self.min_work_items
    }
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            min_work_items: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let params: IsolineParams =
            serde_json::from_str(r#"{ "refine": { "eps": 1e-9 }, "segments": "bucketed" }"#)
                .unwrap();
        assert_eq!(params.refine.eps, 1e-9);
        assert_eq!(params.refine.max_iter, RefineOptions::default().max_iter);
        assert_eq!(params.segments, SegmentStrategy::Bucketed);
        assert_eq!(params.parallel, ParallelOptions::default());
    }

    #[test]
    fn parallel_gate() {
        let opts = ParallelOptions::new(true, 0);
        assert_eq!(opts.min_work_items, 1);
        assert!(opts.should_parallelize(1));
        assert!(!opts.should_parallelize(0));
        assert!(!ParallelOptions::disabled().should_parallelize(usize::MAX));
    }
}

use serde::{Deserialize, Serialize};

/// How vertex pairs are searched when assembling contour edges.
///
/// Both strategies return the same edges in the same `(a, b)` order.
/// - `AllPairs`: plain O(V²) scan over every unordered pair.
/// - `Bucketed`: hash vertices into square cells slightly larger than the
///   adjacency threshold and compare only against the 3x3 neighbourhood.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStrategy {
    #[default]
    AllPairs,
    Bucketed,
}

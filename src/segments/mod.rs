//! Vertex adjacency assembly.
//!
//! Two vertices are joined by an edge when their Euclidean distance is
//! strictly below the grid-cell diagonal `hypot(dx, dy)`. Both the distance
//! and the threshold go through `f64::hypot`, so a pair sitting exactly one
//! diagonal apart (for example two crossings on opposite corners of a cell)
//! is consistently excluded.
//!
//! Edges come out sorted by `(a, b)` with `a < b` regardless of the search
//! strategy, which makes the all-pairs scan and the bucketed index
//! interchangeable.
//!
//! Complexity
//! - [`SegmentStrategy::AllPairs`] is O(V²). Vertex counts grow with the
//!   contour length, so this is fine for smooth fields at moderate resolution.
//! - [`SegmentStrategy::Bucketed`] is O(V) for well-spread vertices and pays
//!   off on fine grids or strongly oscillating fields.

mod bucket;
mod options;

pub use options::SegmentStrategy;

use crate::types::{Edge, Vertex};
use bucket::SpatialIndex;

/// Adjacency test shared by every strategy.
#[inline]
pub fn is_adjacent(p: &Vertex, q: &Vertex, threshold: f64) -> bool {
    (q.x - p.x).hypot(q.y - p.y) < threshold
}

/// Join every pair of vertices closer than `threshold`.
pub fn build_segments(vertices: &[Vertex], threshold: f64, strategy: SegmentStrategy) -> Vec<Edge> {
    match searcher(vertices, threshold, strategy) {
        Searcher::AllPairs => all_pairs(vertices, threshold),
        Searcher::Bucketed(index) => {
            let mut edges = Vec::new();
            let mut near = Vec::new();
            for i in 0..vertices.len() {
                index.neighbours_after(i, vertices, threshold, &mut near);
                push_sorted(i, &mut near, &mut edges);
            }
            edges
        }
    }
}

/// Rayon variant of [`build_segments`], parallel across the first vertex of
/// each pair. Produces the same edge list.
#[cfg(feature = "parallel")]
pub fn build_segments_parallel(
    vertices: &[Vertex],
    threshold: f64,
    strategy: SegmentStrategy,
) -> Vec<Edge> {
    use rayon::prelude::*;

    let searcher = searcher(vertices, threshold, strategy);
    let per_vertex: Vec<Vec<Edge>> = (0..vertices.len())
        .into_par_iter()
        .map(|i| {
            let mut near = Vec::new();
            match &searcher {
                Searcher::AllPairs => near.extend(
                    (i + 1..vertices.len())
                        .filter(|&j| is_adjacent(&vertices[i], &vertices[j], threshold)),
                ),
                Searcher::Bucketed(index) => {
                    index.neighbours_after(i, vertices, threshold, &mut near)
                }
            }
            let mut edges = Vec::with_capacity(near.len());
            push_sorted(i, &mut near, &mut edges);
            edges
        })
        .collect();
    per_vertex.into_iter().flatten().collect()
}

enum Searcher {
    AllPairs,
    Bucketed(SpatialIndex),
}

fn searcher(vertices: &[Vertex], threshold: f64, strategy: SegmentStrategy) -> Searcher {
    match strategy {
        SegmentStrategy::AllPairs => Searcher::AllPairs,
        // Cells need a positive finite size; anything else falls back to the
        // scan, which already handles zero, NaN and infinite thresholds.
        SegmentStrategy::Bucketed if threshold.is_finite() && threshold > 0.0 => {
            match SpatialIndex::build(vertices, threshold) {
                Some(index) => Searcher::Bucketed(index),
                None => Searcher::AllPairs,
            }
        }
        SegmentStrategy::Bucketed => Searcher::AllPairs,
    }
}

fn all_pairs(vertices: &[Vertex], threshold: f64) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in i + 1..vertices.len() {
            if is_adjacent(&vertices[i], &vertices[j], threshold) {
                edges.push(Edge { a: i, b: j });
            }
        }
    }
    edges
}

fn push_sorted(i: usize, near: &mut Vec<usize>, edges: &mut Vec<Edge>) {
    near.sort_unstable();
    edges.extend(near.drain(..).map(|j| Edge { a: i, b: j }));
}

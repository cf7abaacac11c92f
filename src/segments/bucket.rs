use super::is_adjacent;
use crate::types::Vertex;
use std::collections::HashMap;

/// Cells are this much wider than the threshold so that float error in the
/// cell lookup cannot push two adjacent vertices more than one cell apart.
const CELL_MARGIN: f64 = 1.25;

/// Sparse square-cell hash over the finite vertices.
///
/// Non-finite vertices are left out: their distance to anything is NaN or
/// infinite, so they never pass the adjacency test.
pub(crate) struct SpatialIndex {
    inv_cell: f64,
    origin: [f64; 2],
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl SpatialIndex {
    pub(crate) fn build(vertices: &[Vertex], threshold: f64) -> Option<Self> {
        let mut origin = [f64::INFINITY; 2];
        for v in vertices.iter().filter(|v| is_finite(v)) {
            origin[0] = origin[0].min(v.x);
            origin[1] = origin[1].min(v.y);
        }
        if !origin[0].is_finite() {
            return None;
        }

        let mut index = Self {
            inv_cell: (threshold * CELL_MARGIN).recip(),
            origin,
            cells: HashMap::new(),
        };
        for (i, v) in vertices.iter().enumerate() {
            if is_finite(v) {
                let key = index.cell_of(v);
                index.cells.entry(key).or_default().push(i);
            }
        }
        Some(index)
    }

    fn cell_of(&self, p: &Vertex) -> (i64, i64) {
        let cx = ((p.x - self.origin[0]) * self.inv_cell).floor() as i64;
        let cy = ((p.y - self.origin[1]) * self.inv_cell).floor() as i64;
        (cx, cy)
    }

    /// Indices `j > i` adjacent to vertex `i`, appended to `out` unsorted.
    pub(crate) fn neighbours_after(
        &self,
        i: usize,
        vertices: &[Vertex],
        threshold: f64,
        out: &mut Vec<usize>,
    ) {
        let p = &vertices[i];
        if !is_finite(p) {
            return;
        }
        let (cx, cy) = self.cell_of(p);
        for dx in -1..=1i64 {
            for dy in -1..=1i64 {
                let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                let Some(bucket) = self.cells.get(&key) else {
                    continue;
                };
                out.extend(
                    bucket
                        .iter()
                        .copied()
                        .filter(|&j| j > i && is_adjacent(p, &vertices[j], threshold)),
                );
            }
        }
    }
}

#[inline]
fn is_finite(v: &Vertex) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn skips_non_finite_vertices() {
        let vertices = vec![
            Point2::new(f64::NAN, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.0),
            Point2::new(f64::INFINITY, 0.0),
        ];
        let index = SpatialIndex::build(&vertices, 1.0).unwrap();
        let stored: usize = index.cells.values().map(Vec::len).sum();
        assert_eq!(stored, 2);

        let mut out = Vec::new();
        index.neighbours_after(0, &vertices, 1.0, &mut out);
        assert!(out.is_empty());
        index.neighbours_after(1, &vertices, 1.0, &mut out);
        assert_eq!(out, vec![2]);
    }

    #[test]
    fn no_finite_vertices_means_no_index() {
        let vertices = vec![Point2::new(f64::NAN, f64::NAN)];
        assert!(SpatialIndex::build(&vertices, 1.0).is_none());
    }
}

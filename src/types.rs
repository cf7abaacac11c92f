use nalgebra::Point2;
use serde::Serialize;

/// A refined point on the isoline.
pub type Vertex = Point2<f64>;

/// Undirected adjacency between two vertices, stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Build an edge from two distinct indices in either order.
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert_ne!(i, j, "self-loops are not contour edges");
        if i < j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }
}

/// Vertices on the level curve plus short edges joining nearby vertices.
///
/// Vertex order follows the sweep that produced them and carries no
/// geometric meaning; use the edges for connectivity.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Isoline {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Isoline {
    /// `true` when the iso-value does not intersect the sampled domain.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Per-vertex neighbour lists, each sorted ascending.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.vertices.len()];
        for e in &self.edges {
            adj[e.a].push(e.b);
            adj[e.b].push(e.a);
        }
        for list in adj.iter_mut() {
            list.sort_unstable();
        }
        adj
    }

    pub fn degree(&self, vertex: usize) -> usize {
        self.edges
            .iter()
            .filter(|e| e.a == vertex || e.b == vertex)
            .count()
    }
}

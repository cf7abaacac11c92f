mod common;

use common::fields::{circle, diagonal_plane, egg_crate};
use isoline2d::{
    isoline_cartesian, symmetric_grid, CartesianGrid, Edge, FieldFn, Isoline, IsolineError,
    IsolineExtractor, IsolineParams, RefineOptions,
};
use nalgebra::Point2;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_edges_valid(iso: &Isoline, threshold: f64) {
    let n = iso.vertices.len();
    assert!(
        iso.edges.windows(2).all(|w| w[0] < w[1]),
        "edges must be sorted and unique"
    );
    for e in &iso.edges {
        assert!(e.a < e.b && e.b < n, "bad edge {e:?} for {n} vertices");
        let delta = iso.vertices[e.a] - iso.vertices[e.b];
        let d = delta.x.hypot(delta.y);
        assert!(d < threshold, "edge {e:?} spans {d} >= {threshold}");
    }
}

#[test]
fn symmetric_grid_is_always_valid() {
    for n in 0..12 {
        for (x1, x2, y1, y2) in [
            (-1.0, 1.0, -1.0, 1.0),
            (0.0, 5.0, -0.1, 0.1),
            (2.0, 2.0, 0.0, 1.0),
            (-3.0, 3.0, 4.0, -4.0),
        ] {
            let grid = symmetric_grid(x1, x2, y1, y2, n);
            assert!(grid.nx >= 2 && grid.ny >= 2, "n={n} -> {grid:?}");
            assert!(grid.validate().is_ok());
        }
    }
}

#[test]
fn constant_field_has_no_isoline() {
    init_logger();
    let grid = symmetric_grid(-1.0, 1.0, -1.0, 1.0, 20);
    for (value, iso) in [(3.0, 0.0), (-3.0, 0.0), (2.5, 2.5)] {
        let result = isoline_cartesian(&grid, |_: &Point2<f64>, v: &f64| *v, &value, iso).unwrap();
        assert!(result.is_empty(), "value={value} iso={iso}");
        assert!(result.edges.is_empty());
    }
}

#[test]
fn unit_circle_vertices_lie_on_the_curve() {
    init_logger();
    let grid = symmetric_grid(-2.0, 2.0, -2.0, 2.0, 50);
    let extractor = IsolineExtractor::default();
    let eps = extractor.params().refine.eps;
    let iso = extractor
        .extract(&grid, &FieldFn(circle), &1.0, 0.0)
        .unwrap();

    assert!(iso.vertex_count() > 50, "got {} vertices", iso.vertex_count());
    for v in &iso.vertices {
        let residual = circle(v, &1.0).abs();
        assert!(residual < 10.0 * eps, "vertex {v:?} residual {residual}");
    }
    assert_edges_valid(&iso, grid.cell_diagonal());

    // A closed curve sampled this finely leaves no vertex isolated.
    let adjacency = iso.adjacency();
    assert!(adjacency.iter().all(|n| !n.is_empty()));
}

#[test]
fn edges_respect_the_cell_diagonal() {
    init_logger();
    let grid = symmetric_grid(-3.0, 3.0, -3.0, 3.0, 41);
    for level in [-0.5, 0.0, 0.3] {
        let iso = IsolineExtractor::default()
            .extract(&grid, &FieldFn(egg_crate), &(), level)
            .unwrap();
        assert!(!iso.is_empty(), "level={level}");
        assert_edges_valid(&iso, grid.cell_diagonal());
    }
}

#[test]
fn repeated_queries_are_identical() {
    let grid = symmetric_grid(-3.0, 3.0, -3.0, 3.0, 37);
    let extractor = IsolineExtractor::default();
    let first = extractor.extract(&grid, &FieldFn(egg_crate), &(), 0.1).unwrap();
    let second = extractor.extract(&grid, &FieldFn(egg_crate), &(), 0.1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn diagonal_plane_on_three_by_three_grid() {
    init_logger();
    let grid = symmetric_grid(-1.0, 1.0, -1.0, 1.0, 3);
    let iso = isoline_cartesian(&grid, diagonal_plane, &(), 0.0).unwrap();

    // Both sweeps report the node-centred zero, so (0, 0) appears twice.
    assert_eq!(
        iso.vertices,
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, -1.0),
            Point2::new(-1.0, 1.0),
            Point2::new(0.0, 0.0),
        ]
    );
    // The corner vertices sit exactly one diagonal from the centre, which
    // does not count as adjacent.
    assert_eq!(iso.edges, vec![Edge { a: 0, b: 3 }]);
    assert_eq!(iso.degree(1), 0);
    assert_eq!(iso.degree(0), 1);
}

#[test]
fn iso_value_shifts_the_curve() {
    let grid = symmetric_grid(-1.0, 1.0, -1.0, 1.0, 11);
    let plane = |p: &Point2<f64>, _: &()| p.x;
    let iso = isoline_cartesian(&grid, plane, &(), 0.35).unwrap();
    assert!(!iso.is_empty());
    for v in &iso.vertices {
        assert!((v.x - 0.35).abs() < 1e-6, "vertex {v:?}");
    }
    assert_edges_valid(&iso, grid.cell_diagonal());
}

#[test]
fn context_reaches_every_evaluation() {
    let grid = symmetric_grid(-2.0, 2.0, -2.0, 2.0, 30);
    let small = isoline_cartesian(&grid, circle, &0.5, 0.0).unwrap();
    let large = isoline_cartesian(&grid, circle, &1.5, 0.0).unwrap();
    for v in &small.vertices {
        assert!((v.coords.norm() - 0.5).abs() < 1e-5);
    }
    for v in &large.vertices {
        assert!((v.coords.norm() - 1.5).abs() < 1e-5);
    }
}

#[test]
fn tighter_tolerance_reduces_the_residual() {
    let grid = symmetric_grid(-2.0, 2.0, -2.0, 2.0, 20);
    let params = IsolineParams {
        refine: RefineOptions::default().with_eps(1e-12),
        ..Default::default()
    };
    let report = IsolineExtractor::new(params)
        .extract_with_diagnostics(&grid, &FieldFn(circle), &1.0, 0.0)
        .unwrap();
    assert_eq!(report.trace.refine.exhausted, 0);
    for v in &report.isoline.vertices {
        assert!(circle(v, &1.0).abs() < 1e-10, "vertex {v:?}");
    }
}

#[test]
fn invalid_grid_is_rejected() {
    let grid = CartesianGrid {
        nx: 1,
        ny: 4,
        x0: 0.0,
        dx: 1.0,
        y0: 0.0,
        dy: 1.0,
    };
    let err = isoline_cartesian(&grid, diagonal_plane, &(), 0.0).unwrap_err();
    assert!(matches!(err, IsolineError::InvalidGrid { nx: 1, ny: 4 }));
    assert_eq!(
        err.to_string(),
        "invalid grid (1x4 nodes, need at least 2x2)"
    );
}

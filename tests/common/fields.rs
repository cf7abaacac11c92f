//! Analytic fields shared by the integration tests.
#![allow(dead_code)]

use nalgebra::Point2;

/// `x² + y² − r²`, zero on the circle of radius `r`.
pub fn circle(p: &Point2<f64>, r: &f64) -> f64 {
    p.x * p.x + p.y * p.y - r * r
}

/// `x + y`, zero on the anti-diagonal.
pub fn diagonal_plane(p: &Point2<f64>, _: &()) -> f64 {
    p.x + p.y
}

/// Tight-binding band of a simple cubic lattice cut at `kz = 0`.
pub fn cubic_band(p: &Point2<f64>, hopping: &f64) -> f64 {
    -2.0 * hopping * (p.x.cos() + p.y.cos() + 1.0)
}

/// A smooth field with several closed components on `[-3, 3]²`.
pub fn egg_crate(p: &Point2<f64>, _: &()) -> f64 {
    (1.7 * p.x).sin() * (1.3 * p.y).cos() + 0.1 * p.x
}

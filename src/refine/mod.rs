//! Bisection root refinement of grid-line crossings.
//!
//! Each [`Crossing`](crate::crossing::Crossing) brackets a zero of the
//! shifted field along one axis with the other coordinate held fixed.
//! [`bisect_root`] halves the bracket until it is no wider than
//! [`RefineOptions::eps`] or [`RefineOptions::max_iter`] steps have run, then
//! interpolates linearly between the final endpoints.
//!
//! The driver functions turn a batch of crossings into vertices, either
//! sequentially or with Rayon under the `parallel` feature. Both keep the
//! crossing order.

mod bisect;
mod driver;
mod options;

pub use bisect::{bisect_root, internal_division, RootEstimate};
#[cfg(feature = "parallel")]
pub use driver::collect_vertices_parallel;
pub use driver::{collect_vertices, refine_crossing, RefinedVertices};
pub use options::RefineOptions;

//! Sampling grid and dense field evaluation.
//!
//! - [`cartesian`]: the regular grid description and the square-cell
//!   [`symmetric_grid`] builder.
//! - [`sampling`]: evaluates the shifted field at every node into a
//!   [`SampleBuffer`].

pub mod cartesian;
pub mod sampling;

pub use cartesian::{symmetric_grid, CartesianGrid, GridBounds};
#[cfg(feature = "parallel")]
pub use sampling::sample_field_parallel;
pub use sampling::{sample_field, SampleBuffer};

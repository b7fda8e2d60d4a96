//! Net-worth projection lookups.
//!
//! The backend precomputes a sparse series of yearly points; this module
//! answers "what is the value at year N" for any N.

pub mod error;
pub mod interpolator;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ProjectionError;
pub use interpolator::{MAX_SAMPLES, ProjectionInterpolator};
pub use types::{ProjectionMetric, ProjectionPoint, ProjectionSample, ProjectionSeries};

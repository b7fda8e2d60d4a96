//! Projection error types.

use thiserror::Error;

/// Projection-related errors.
///
/// Only raised while building a series; interpolation itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// Points are not strictly ascending by year offset.
    #[error(
        "Projection points must be strictly ascending by years: \
         point {index} has {current} after {previous}"
    )]
    UnsortedSeries {
        /// Position of the offending point.
        index: usize,
        /// Year offset of the preceding point.
        previous: u32,
        /// Year offset of the offending point.
        current: u32,
    },
}

use thiserror::Error;

use crate::SpatialReference;

/// An interface for error handling in las-bounds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    /// Error when a per-axis delta vector is not strictly shorter than the bounds dimension.
    #[error(
        "Bounds::{operation}: Delta vector size, {deltas}, is larger than the dimensionality of the bounds, {dimension}"
    )]
    Dimensionality {
        /// The mutator that rejected the deltas.
        operation: &'static str,
        /// Length of the delta vector.
        deltas: usize,
        /// Dimension of the bounds.
        dimension: usize,
    },
    /// Error when the minimum exceeds the maximum on an axis and neither is infinite.
    #[error(
        "Bounds::verify: Minimum point at dimension {axis} is greater than maximum point. Neither point is infinity"
    )]
    InvalidExtent {
        /// The offending axis.
        axis: usize,
    },
    /// Error when no transform is registered between two spatial references.
    #[error("No transform registered from {from} to {to}")]
    UnknownTransform {
        #[allow(missing_docs)]
        from: SpatialReference,
        #[allow(missing_docs)]
        to: SpatialReference,
    },
    /// Error when the registered transform cannot be inverted.
    #[error("Transform from {to} to {from} is not invertible")]
    SingularTransform {
        #[allow(missing_docs)]
        from: SpatialReference,
        #[allow(missing_docs)]
        to: SpatialReference,
    },
}

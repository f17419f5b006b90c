//! Axis-aligned ranges and bounds for tracking the extent of point cloud data.
//!
//! A [`Range`] is a closed interval along one axis. A [`Bounds`] is an ordered list of ranges, one
//! per axis, whose dimension grows on write. Bounds can be tested for overlap, shifted, scaled,
//! clipped, grown and reprojected between spatial references through a [`Reprojection`].
//!
//! ```
//! use las_bounds::{Bounds, Identity, SpatialReference};
//! use nalgebra::Point3;
//!
//! let mut bounds = Bounds::new_3d(0., 0., 0., 10., 10., 10.);
//! bounds.grow_point(&Point3::new(-5., 2., 20.));
//! assert_eq!(Point3::new(-5., 0., 0.), bounds.min_point());
//!
//! let wgs84 = SpatialReference::Epsg(4326);
//! let Ok(projected) = bounds.project(&Identity, &wgs84, &wgs84);
//! assert_eq!(bounds, projected);
//! ```

mod bounds;
mod coordinate;
mod error;
mod range;
mod reprojection;

pub use bounds::Bounds;
pub use coordinate::Coordinate;
pub use error::BoundsError;
pub use range::{Range, RangeState};
pub use reprojection::{AffineReprojection, Identity, Reprojection, SpatialReference};

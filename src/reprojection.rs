use std::{collections::HashMap, convert::Infallible, fmt};

use nalgebra::{Affine3, Point3, RealField};

use crate::{Bounds, BoundsError, Coordinate};

/// Descriptor of a coordinate reference system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpatialReference {
    /// An EPSG authority code, e.g. `4326` for WGS 84.
    Epsg(u32),
    /// A well-known-text definition, compared verbatim.
    Wkt(String),
}

impl fmt::Display for SpatialReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsg(code) => write!(f, "EPSG:{code}"),
            Self::Wkt(wkt) => write!(f, "{wkt}"),
        }
    }
}

/// A service that moves points from one spatial reference to another.
pub trait Reprojection<T: Coordinate> {
    /// Descriptor of a coordinate reference system understood by this service.
    type SpatialReference;
    /// Failure raised by [`Reprojection::transform`].
    type Error;

    /// Transforms `point` in place from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Implementation defined.
    fn transform(
        &self,
        source: &Self::SpatialReference,
        target: &Self::SpatialReference,
        point: &mut Point3<T>,
    ) -> Result<(), Self::Error>;
}

/// Reprojection that leaves every point untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T: Coordinate> Reprojection<T> for Identity {
    type SpatialReference = SpatialReference;
    type Error = Infallible;

    fn transform(
        &self,
        _: &SpatialReference,
        _: &SpatialReference,
        _: &mut Point3<T>,
    ) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Reprojection through registered affine transforms.
///
/// A pair registered as `source -> target` also serves `target -> source` through its inverse.
/// Identical references always map through the identity.
#[derive(Debug, Clone, Default)]
pub struct AffineReprojection<T: RealField> {
    transforms: HashMap<(SpatialReference, SpatialReference), Affine3<T>>,
}

impl<T: Coordinate + RealField> AffineReprojection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// Registers the transform from `source` to `target`, replacing any previous one.
    #[must_use]
    pub fn with_transform(
        mut self,
        source: SpatialReference,
        target: SpatialReference,
        transform: Affine3<T>,
    ) -> Self {
        self.transforms.insert((source, target), transform);
        self
    }

    fn resolve(
        &self,
        source: &SpatialReference,
        target: &SpatialReference,
    ) -> Result<Affine3<T>, BoundsError> {
        if let Some(transform) = self.transforms.get(&(source.clone(), target.clone())) {
            return Ok(*transform);
        }
        let reverse = self
            .transforms
            .get(&(target.clone(), source.clone()))
            .ok_or_else(|| BoundsError::UnknownTransform {
                from: source.clone(),
                to: target.clone(),
            })?;
        (*reverse)
            .try_inverse()
            .ok_or_else(|| BoundsError::SingularTransform {
                from: source.clone(),
                to: target.clone(),
            })
    }
}

impl<T: Coordinate + RealField> Reprojection<T> for AffineReprojection<T> {
    type SpatialReference = SpatialReference;
    type Error = BoundsError;

    fn transform(
        &self,
        source: &SpatialReference,
        target: &SpatialReference,
        point: &mut Point3<T>,
    ) -> Result<(), BoundsError> {
        if source == target {
            return Ok(());
        }
        *point = self.resolve(source, target)?.transform_point(point);
        Ok(())
    }
}

impl<T: Coordinate> Bounds<T> {
    /// Reprojects the corner points from `source` to `target` and returns the 3-dimensional bounds
    /// spanning them, whatever the dimension of `self`.
    ///
    /// # Errors
    ///
    /// Propagates the failure of `reprojection`.
    pub fn project<R: Reprojection<T>>(
        &self,
        reprojection: &R,
        source: &R::SpatialReference,
        target: &R::SpatialReference,
    ) -> Result<Bounds<T>, R::Error> {
        let mut minimum = self.min_point();
        let mut maximum = self.max_point();
        reprojection.transform(source, target, &mut minimum)?;
        reprojection.transform(source, target, &mut maximum)?;
        tracing::debug!(bounds = %self, min = ?minimum, max = ?maximum, "projected bounds");
        Ok(Bounds::from_corners(&minimum, &maximum))
    }
}

use std::fmt;

use derive_more::Deref;
use itertools::Itertools;
use nalgebra::Point3;
use smallvec::SmallVec;

use crate::{BoundsError, Coordinate, Range};

macro_rules! axis_accessors {
    ($($axis:ident => $index:literal),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Minimum along ", stringify!($axis), ", or zero when the axis is absent.")]
                #[must_use]
                pub fn [<min $axis>](&self) -> T {
                    self.min($index)
                }

                #[doc = concat!("Maximum along ", stringify!($axis), ", or zero when the axis is absent.")]
                #[must_use]
                pub fn [<max $axis>](&self) -> T {
                    self.max($index)
                }
            )*
        }
    };
}

/// An axis-aligned bounding volume made of one [`Range`] per axis.
///
/// Axis 0 is X, 1 is Y and 2 is Z by convention, but the dimension is dynamic. Writing to an axis
/// beyond the current dimension grows the bounds; reading one returns zero.
#[derive(Deref, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T> {
    #[deref(forward)]
    dims: SmallVec<[Range<T>; 3]>,
}

impl<T: Coordinate> Default for Bounds<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coordinate> From<Vec<Range<T>>> for Bounds<T> {
    fn from(ranges: Vec<Range<T>>) -> Self {
        Self::from_ranges(ranges)
    }
}

impl<'a, T> IntoIterator for &'a Bounds<T> {
    type Item = &'a Range<T>;
    type IntoIter = std::slice::Iter<'a, Range<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.iter()
    }
}

impl<T: Coordinate> Bounds<T> {
    /// Creates bounds of dimension 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dims: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn from_ranges(ranges: impl IntoIterator<Item = Range<T>>) -> Self {
        Self {
            dims: ranges.into_iter().collect(),
        }
    }

    /// Creates 2-dimensional bounds.
    #[must_use]
    pub fn new_2d(minx: T, miny: T, maxx: T, maxy: T) -> Self {
        Self::from_ranges([Range::new(minx, maxx), Range::new(miny, maxy)]).checked()
    }

    /// Creates 3-dimensional bounds.
    #[must_use]
    pub fn new_3d(minx: T, miny: T, minz: T, maxx: T, maxy: T, maxz: T) -> Self {
        Self::from_ranges([
            Range::new(minx, maxx),
            Range::new(miny, maxy),
            Range::new(minz, maxz),
        ])
        .checked()
    }

    /// Creates 3-dimensional bounds spanning two corner points.
    #[must_use]
    pub fn from_corners(min: &Point3<T>, max: &Point3<T>) -> Self {
        Self::new_3d(min.x, min.y, min.z, max.x, max.y, max.z)
    }

    fn checked(self) -> Self {
        if cfg!(debug_assertions)
            && let Err(e) = self.verify()
        {
            tracing::warn!("{}", e);
        }
        self
    }

    #[must_use]
    pub fn dims(&self) -> &[Range<T>] {
        &self.dims
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dims.len()
    }

    /// Grows the bounds to at least `dimension` axes, filling new axes with empty ranges.
    pub fn set_dimension(&mut self, dimension: usize) {
        if self.dims.len() < dimension {
            tracing::trace!(from = self.dims.len(), to = dimension, "growing bounds");
            self.dims.resize(dimension, Range::default());
        }
    }

    fn axis_mut(&mut self, index: usize) -> &mut Range<T> {
        self.set_dimension(index + 1);
        &mut self.dims[index]
    }

    /// Minimum along `index`, or zero when the axis is absent.
    #[must_use]
    pub fn min(&self, index: usize) -> T {
        self.dims.get(index).map_or_else(T::zero, |r| r.min)
    }

    /// Maximum along `index`, or zero when the axis is absent.
    #[must_use]
    pub fn max(&self, index: usize) -> T {
        self.dims.get(index).map_or_else(T::zero, |r| r.max)
    }

    /// Sets the minimum along `index`, growing the bounds when the axis is absent.
    pub fn set_min(&mut self, index: usize, value: T) {
        self.axis_mut(index).min = value;
    }

    /// Sets the maximum along `index`, growing the bounds when the axis is absent.
    pub fn set_max(&mut self, index: usize, value: T) {
        self.axis_mut(index).max = value;
    }

    axis_accessors!(x => 0, y => 1, z => 2);

    /// Corner made of the minima of axes 0 to 2.
    #[must_use]
    pub fn min_point(&self) -> Point3<T> {
        self.corner(|r| r.min)
    }

    /// Corner made of the maxima of axes 0 to 2.
    #[must_use]
    pub fn max_point(&self) -> Point3<T> {
        self.corner(|r| r.max)
    }

    fn corner(&self, pick: fn(&Range<T>) -> T) -> Point3<T> {
        let coord = |index: usize| self.dims.get(index).map(pick);
        let z = coord(2).unwrap_or_else(|| {
            tracing::trace!(
                dimension = self.dimension(),
                "bounds has no z axis, using z = 0 for the corner"
            );
            T::zero()
        });
        Point3::new(
            coord(0).unwrap_or_else(T::zero),
            coord(1).unwrap_or_else(T::zero),
            z,
        )
    }

    /// Axis-wise [`Range::equal`] over the axes of `self`.
    ///
    /// An axis of `self` that `other` lacks compares unequal. Axes only `other` has are ignored.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.dims
            .iter()
            .enumerate()
            .all(|(i, r)| other.dims.get(i).is_some_and(|o| r.equal(o)))
    }

    /// True as soon as any single axis overlaps the corresponding axis of `other`.
    ///
    /// This is weaker than box intersection; see [`Bounds::intersects_all_axes`].
    ///
    /// # Panics
    ///
    /// Panics if `other` has fewer axes than `self` and no earlier axis overlaps.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.dims
            .iter()
            .enumerate()
            .any(|(i, r)| r.overlaps(&other.dims[i]))
    }

    /// Synonym for [`Bounds::intersects`].
    ///
    /// # Panics
    ///
    /// See [`Bounds::intersects`].
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.intersects(other)
    }

    /// Returns `true` for any `other`.
    ///
    /// Axes are visited until one contains the corresponding axis of `other`, but the result does
    /// not depend on it. Use [`Bounds::contains_all_axes`] for box containment.
    ///
    /// # Panics
    ///
    /// Panics if `other` has fewer axes than `self` and no earlier axis contains its counterpart.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        if self
            .dims
            .iter()
            .enumerate()
            .any(|(i, r)| r.contains(&other.dims[i]))
        {
            return true;
        }
        true
    }

    /// Box intersection: every axis of `self` overlaps the same axis of `other`.
    ///
    /// An axis missing from `other` does not overlap.
    #[must_use]
    pub fn intersects_all_axes(&self, other: &Self) -> bool {
        self.dims
            .iter()
            .enumerate()
            .all(|(i, r)| other.dims.get(i).is_some_and(|o| r.overlaps(o)))
    }

    /// Box containment: every axis of `self` contains the same axis of `other`.
    ///
    /// An axis missing from `other` is not contained.
    #[must_use]
    pub fn contains_all_axes(&self, other: &Self) -> bool {
        self.dims
            .iter()
            .enumerate()
            .all(|(i, r)| other.dims.get(i).is_some_and(|o| r.contains(o)))
    }

    /// True if any axis still holds the empty sentinel.
    #[must_use]
    pub fn empty(&self) -> bool {
        self.dims.iter().any(Range::empty)
    }

    fn check_deltas(&self, operation: &'static str, deltas: &[T]) -> Result<(), BoundsError> {
        if self.dimension() <= deltas.len() {
            return Err(BoundsError::Dimensionality {
                operation,
                deltas: deltas.len(),
                dimension: self.dimension(),
            });
        }
        Ok(())
    }

    /// Shifts axis `i` by `deltas[i]`. Empty axes keep their sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Dimensionality`] unless `deltas` is strictly shorter than the
    /// dimension.
    pub fn shift(&mut self, deltas: &[T]) -> Result<(), BoundsError> {
        self.check_deltas("shift", deltas)?;
        self.dims
            .iter_mut()
            .zip(deltas)
            .filter(|(r, _)| !r.empty())
            .for_each(|(r, &delta)| r.shift(delta));
        Ok(())
    }

    /// Scales axis `i` by `deltas[i]`. Empty axes keep their sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Dimensionality`] unless `deltas` is strictly shorter than the
    /// dimension.
    pub fn scale(&mut self, deltas: &[T]) -> Result<(), BoundsError> {
        self.check_deltas("scale", deltas)?;
        self.dims
            .iter_mut()
            .zip(deltas)
            .filter(|(r, _)| !r.empty())
            .for_each(|(r, &factor)| r.scale(factor));
        Ok(())
    }

    /// Clips every axis of `self` to the same axis of `other`.
    ///
    /// # Panics
    ///
    /// Panics if `other` has fewer axes than `self`.
    pub fn clip(&mut self, other: &Self) {
        for (i, r) in self.dims.iter_mut().enumerate() {
            r.clip(&other.dims[i]);
        }
    }

    /// Grows every axis of `self` to the union with the same axis of `other`.
    ///
    /// # Panics
    ///
    /// Panics if `other` has fewer axes than `self`.
    pub fn grow(&mut self, other: &Self) {
        for (i, r) in self.dims.iter_mut().enumerate() {
            r.grow_range(&other.dims[i]);
        }
    }

    /// Grows axes 0, 1 and 2 to include `point`.
    ///
    /// # Panics
    ///
    /// Panics if the dimension is less than 3.
    pub fn grow_point(&mut self, point: &Point3<T>) {
        self.dims[0].grow(point.x);
        self.dims[1].grow(point.y);
        self.dims[2].grow(point.z);
    }

    /// Length of an axis, zero while it holds the empty sentinel.
    fn extent(r: &Range<T>) -> T {
        if r.empty() { T::zero() } else { r.length() }
    }

    /// Product of the axis lengths folded into an accumulator that starts at zero, so the result
    /// is always zero. [`Bounds::hypervolume`] starts from one.
    #[must_use]
    pub fn volume(&self) -> T {
        self.dims
            .iter()
            .fold(T::zero(), |output, r| output * Self::extent(r))
    }

    /// Product of the axis lengths. One for dimension 0, zero if any axis is empty.
    #[must_use]
    pub fn hypervolume(&self) -> T {
        self.dims
            .iter()
            .fold(T::one(), |output, r| output * Self::extent(r))
    }

    /// Checks that no axis has `min > max` unless one of them is at the type limit.
    ///
    /// For unsigned types the lower limit is zero, so an inverted axis whose maximum is zero
    /// passes.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::InvalidExtent`] for the first offending axis.
    pub fn verify(&self) -> Result<(), BoundsError> {
        (0..self.dimension()).try_for_each(|axis| {
            let (min, max) = (self.min(axis), self.max(axis));
            if min > max
                && !min.compare_distance(T::max_value())
                && !max.compare_distance(T::min_value())
            {
                return Err(BoundsError::InvalidExtent { axis });
            }
            Ok(())
        })
    }
}

/// Compares over the axes of the left operand only, so `==` is not symmetric between bounds of
/// different dimensions.
impl<T: Coordinate> PartialEq for Bounds<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Coordinate> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.dims.iter().join(", "))
    }
}

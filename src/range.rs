use std::{fmt, ops::RangeInclusive};

use approx::AbsDiffEq;

use crate::Coordinate;

/// Explicit view of a [`Range`] that separates "never initialized" from a populated, possibly
/// inverted, interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeState<T> {
    /// The range still holds the empty sentinel.
    Empty,
    /// The range holds data. `min > max` is possible after negative scaling or clipping.
    Populated {
        #[allow(missing_docs)]
        min: T,
        #[allow(missing_docs)]
        max: T,
    },
}

/// A closed interval `[min, max]` along one axis.
///
/// The default value is the inverted pair `(T::max_value(), T::min_value())`, which acts as the
/// empty sentinel: growing it by any value yields the degenerate interval `[v, v]`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
    #[allow(missing_docs)]
    pub min: T,
    #[allow(missing_docs)]
    pub max: T,
}

impl<T: Coordinate> Default for Range<T> {
    fn default() -> Self {
        Self {
            min: T::max_value(),
            max: T::min_value(),
        }
    }
}

impl<T: Coordinate> From<RangeInclusive<T>> for Range<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (min, max) = range.into_inner();
        Self { min, max }
    }
}

impl<T: Coordinate> Range<T> {
    /// Creates a populated range. No ordering between `min` and `max` is enforced.
    #[must_use]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Both endpoints compare equal within the default tolerance of `T`.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.min.compare_distance(other.min) && self.max.compare_distance(other.max)
    }

    /// Closed-interval overlap; ranges touching at an endpoint overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && self.max >= other.min
    }

    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    #[must_use]
    pub fn contains_value(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Whether the range still holds the exact default sentinel.
    ///
    /// An inverted range produced any other way is not empty.
    #[must_use]
    pub fn empty(&self) -> bool {
        self.min == T::max_value() && self.max == T::min_value()
    }

    #[must_use]
    pub fn state(&self) -> RangeState<T> {
        if self.empty() {
            RangeState::Empty
        } else {
            RangeState::Populated {
                min: self.min,
                max: self.max,
            }
        }
    }

    pub fn shift(&mut self, delta: T) {
        self.min += delta;
        self.max += delta;
    }

    /// Multiplies both endpoints. A negative factor inverts the interval and is left as is.
    pub fn scale(&mut self, factor: T) {
        self.min *= factor;
        self.max *= factor;
    }

    /// Narrows to the intersection with `other`. The result may be inverted when disjoint.
    pub fn clip(&mut self, other: &Self) {
        if other.min > self.min {
            self.min = other.min;
        }
        if other.max < self.max {
            self.max = other.max;
        }
    }

    pub fn grow(&mut self, value: T) {
        self.min = self.min.partial_min(value);
        self.max = self.max.partial_max(value);
    }

    /// Grows to include both endpoints of `other`.
    pub fn grow_range(&mut self, other: &Self) {
        self.grow(other.min);
        self.grow(other.max);
    }

    /// `max - min`, negative for an inverted range.
    #[must_use]
    pub fn length(&self) -> T {
        self.max - self.min
    }
}

impl<T: Coordinate> PartialEq for Range<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Coordinate> AbsDiffEq for Range<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}

impl<T: Coordinate> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

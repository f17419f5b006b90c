use std::{
    fmt::Display,
    ops::{AddAssign, MulAssign},
};

use approx::AbsDiffEq;
use num_traits::{Bounded, Num};

/// Numeric capabilities required of a coordinate type stored in a [`Range`](crate::Range).
///
/// Implemented for every type that is totally ordered for practical purposes, supports the
/// arithmetic used by the mutators, has representable limits for the empty sentinel and a
/// tolerant comparison through [`AbsDiffEq`]. All primitive integers and floats qualify.
pub trait Coordinate:
    nalgebra::Scalar
    + Copy
    + PartialOrd
    + Num
    + AddAssign
    + MulAssign
    + Bounded
    + AbsDiffEq<Epsilon = Self>
    + Display
{
    /// Tolerant equality with the type's default epsilon.
    ///
    /// Types whose epsilon is zero compare exactly, so integer limits never overflow.
    fn compare_distance(self, other: Self) -> bool {
        let epsilon = Self::default_epsilon();
        self == other || (epsilon != Self::zero() && self.abs_diff_eq(&other, epsilon))
    }

    /// The smaller of `self` and `other`, keeping `self` when they are unordered.
    fn partial_min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// The larger of `self` and `other`, keeping `self` when they are unordered.
    fn partial_max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

impl<T> Coordinate for T where
    T: nalgebra::Scalar
        + Copy
        + PartialOrd
        + Num
        + AddAssign
        + MulAssign
        + Bounded
        + AbsDiffEq<Epsilon = T>
        + Display
{
}

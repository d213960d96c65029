//! Shared types for polyline simplification.
//!
//! The algorithms are generic over the caller's point representation via
//! the [`Vertex`] trait, so existing coordinate data (tuples, arrays, or a
//! custom struct) can be simplified without conversion. [`Point`] and
//! [`Polyline`] are provided for callers that have no type of their own.

use num_traits::Signed;
use serde::{Deserialize, Serialize};

/// Numeric type usable as a coordinate and as a squared distance.
///
/// Any ordered, signed numeric type qualifies: `i32`, `i64`, `f32`,
/// `f64`, and so on. Unsigned integers are excluded because a segment
/// direction (`p2 - p1`) can be negative.
///
/// With integer scalars the projection parameter of
/// [`squared_segment_distance`](crate::distance::squared_segment_distance)
/// is computed with integer division, so interior projections snap to
/// the segment endpoints.
pub trait Scalar: Copy + PartialOrd + Signed {}

impl<T: Copy + PartialOrd + Signed> Scalar for T {}

/// A 2D point exposing two coordinate accessors.
pub trait Vertex {
    /// Coordinate and distance type.
    type Scalar: Scalar;

    /// Horizontal coordinate.
    fn x(&self) -> Self::Scalar;

    /// Vertical coordinate.
    fn y(&self) -> Self::Scalar;
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point<T = f64> {
    /// Horizontal position.
    pub x: T,
    /// Vertical position.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Point<T> {
    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> T {
        crate::distance::squared_distance(&self, &other)
    }
}

impl<T: Scalar> Vertex for Point<T> {
    type Scalar = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

impl<T: Scalar> Vertex for (T, T) {
    type Scalar = T;

    fn x(&self) -> T {
        self.0
    }

    fn y(&self) -> T {
        self.1
    }
}

impl<T: Scalar> Vertex for [T; 2] {
    type Scalar = T;

    fn x(&self) -> T {
        self[0]
    }

    fn y(&self) -> T {
        self[1]
    }
}

impl<P: Vertex + ?Sized> Vertex for &P {
    type Scalar = P::Scalar;

    fn x(&self) -> P::Scalar {
        (**self).x()
    }

    fn y(&self) -> P::Scalar {
        (**self).y()
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered sequence of points forming a path.
///
/// Insertion order defines the path; duplicate consecutive points are
/// allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polyline<P = Point>(Vec<P>);

impl<P> Polyline<P> {
    /// Create a new polyline from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<P>) -> Self {
        Self(points)
    }

    /// Returns `true` if the polyline has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the polyline.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&P> {
        self.0.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&P> {
        self.0.last()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[P] {
        &self.0
    }

    /// Consumes the polyline and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<P> {
        self.0
    }
}

impl<P> From<Vec<P>> for Polyline<P> {
    fn from(points: Vec<P>) -> Self {
        Self::new(points)
    }
}

/// Selects the simplification pipeline.
///
/// Mirrors the `highest_quality` flag of [`simplify`](crate::simplify):
/// `true` maps to [`Highest`](Self::Highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    /// Douglas-Peucker on the full input. Best deviation-bounded result.
    #[default]
    Highest,
    /// Radial-distance prefilter, then Douglas-Peucker on the survivors.
    ///
    /// Faster on dense input, but the prefilter only compares each point
    /// to the previously kept one and can drop points Douglas-Peucker
    /// would have kept.
    Fast,
}

impl Quality {
    /// Map the `highest_quality` flag to a pipeline selection.
    #[must_use]
    pub const fn from_highest_quality(highest_quality: bool) -> Self {
        if highest_quality {
            Self::Highest
        } else {
            Self::Fast
        }
    }

    /// Returns `true` for [`Highest`](Self::Highest).
    #[must_use]
    pub const fn is_highest(self) -> bool {
        matches!(self, Self::Highest)
    }

    /// Whether the radial-distance prefilter runs before Douglas-Peucker.
    #[must_use]
    pub const fn uses_radial_prefilter(self) -> bool {
        matches!(self, Self::Fast)
    }
}

impl From<bool> for Quality {
    fn from(highest_quality: bool) -> Self {
        Self::from_highest_quality(highest_quality)
    }
}

/// Configuration for a simplification run.
///
/// `tolerance` is the maximum allowed deviation, in the same units as the
/// coordinates. It is squared once per run and compared against squared
/// distances, so a negative tolerance behaves like its absolute value.
/// Call [`validate`](Self::validate) to reject negative tolerances instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifyConfig<T = f64> {
    /// Maximum allowed deviation.
    pub tolerance: T,

    /// Which pipeline to run.
    #[serde(default)]
    pub quality: Quality,
}

impl SimplifyConfig<f64> {
    /// Default tolerance, in coordinate units.
    pub const DEFAULT_TOLERANCE: f64 = 1.0;

    /// Default pipeline.
    pub const DEFAULT_QUALITY: Quality = Quality::Highest;
}

impl<T: Scalar> Default for SimplifyConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::one(),
            quality: Quality::default(),
        }
    }
}

impl<T> SimplifyConfig<T> {
    /// Create a configuration from a tolerance and pipeline selection.
    #[must_use]
    pub const fn new(tolerance: T, quality: Quality) -> Self {
        Self { tolerance, quality }
    }
}

impl<T: Scalar> SimplifyConfig<T> {
    /// The tolerance squared, as compared against squared distances.
    #[must_use]
    pub fn sq_tolerance(&self) -> T {
        self.tolerance * self.tolerance
    }

    /// Reject tolerances that are negative or unordered (NaN).
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidConfig`] if the tolerance is not
    /// greater than or equal to zero.
    pub fn validate(&self) -> Result<(), SimplifyError> {
        if self.tolerance >= T::zero() {
            Ok(())
        } else {
            Err(SimplifyError::InvalidConfig(
                "tolerance must be a non-negative number".to_owned(),
            ))
        }
    }
}

/// Errors that can occur when preparing a simplification run.
///
/// The algorithms themselves are total; only configuration checks fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SimplifyError {
    /// Simplification configuration is invalid.
    #[error("invalid simplify configuration: {0}")]
    InvalidConfig(String),
}

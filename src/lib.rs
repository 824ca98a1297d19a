//! Triangulation of simple polygons by ear clipping.
//!
//! A polygon is handed over as an ordered sequence of 2D points. The
//! triangulator repeatedly finds an ear (a vertex whose triangle with its two
//! neighbors is convex and contains no other vertex), emits that triangle,
//! and removes the vertex, until a single triangle remains. The result is a
//! flat list of [VertexId](data::VertexId)s into the caller's original point
//! sequence, three per triangle.
//!
//! ```rust
//! use earclip::algorithms::triangulate_points;
//! use earclip::data::Point;
//!
//! let hexagon = vec![
//!   Point::new(23.0, -14.0),
//!   Point::new(19.5, -7.7),
//!   Point::new(13.3, -8.6),
//!   Point::new(5.5, -11.0),
//!   Point::new(6.5, -20.0),
//!   Point::new(13.0, -23.0),
//! ];
//! let triangles = triangulate_points(hexagon).unwrap();
//! let indices: Vec<usize> = triangles.iter().map(|id| id.usize()).collect();
//! assert_eq!(indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5]);
//! ```
#![deny(clippy::cast_lossless)]
use num_traits::{NumOps, One, Zero};
use std::cmp::Ordering;
use std::ops::Neg;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

use data::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// Three points are oriented clockwise where counter-clockwise was required.
  ClockWiseViolation,
  /// A full pass over the remaining vertices found no ear. The polygon is
  /// self-intersecting or otherwise malformed.
  NoEarFound,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::NoEarFound => write!(f, "No ear found"),
    }
  }
}

impl std::error::Error for Error {}

/// Numeric field the geometry is computed over.
///
/// The containment test solves a 2x2 linear system and divides, so scalars
/// must support true (field) division: floating point types, their
/// totally-ordered wrappers, and arbitrary-precision rationals. Plain
/// integers are deliberately not supported.
pub trait PolygonScalar:
  std::fmt::Debug + Clone + PartialOrd + Zero + One + Neg<Output = Self> + NumOps<Self, Self>
{
  /// Compare the turn taken when walking `p` -> `q` -> `r`:
  /// `Ordering::Greater` for a counter-clockwise turn, `Ordering::Less` for
  /// clockwise, `Ordering::Equal` for collinear points.
  fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! floating_scalar {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        // The adaptive-precision machinery of `geometry_predicates` gives the
        // exact sign of the determinant; collinear triples compare Equal.
        fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_scalar {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [f64::from(p[0].into_inner()), f64::from(p[1].into_inner())],
            [f64::from(q[0].into_inner()), f64::from(q[1].into_inner())],
            [f64::from(r[0].into_inner()), f64::from(r[1].into_inner())],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

floating_scalar!(f32, f64);
wrapped_floating_scalar!(ordered_float::OrderedFloat<f32>);
wrapped_floating_scalar!(ordered_float::OrderedFloat<f64>);
wrapped_floating_scalar!(ordered_float::NotNan<f32>);
wrapped_floating_scalar!(ordered_float::NotNan<f64>);

impl PolygonScalar for num_rational::BigRational {
  fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    let pq = Vector([&q[0] - &p[0], &q[1] - &p[1]]);
    let pr = Vector([&r[0] - &p[0], &r[1] - &p[1]]);
    pq.cross_z(&pr).cmp(&num_rational::BigRational::zero())
  }
}

#[cfg(test)]
pub mod testing;

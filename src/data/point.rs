use array_init::array_init;
use num_traits::Float;
use ordered_float::NotNan;
use std::ops::{Deref, Index};

use crate::Orientation;
use crate::PolygonScalar;

/// Coordinate pair with value semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(x: T, y: T) -> Point<T> {
    Point { array: [x, y] }
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(x: T, y: T) -> Point<NotNan<T>>
  where
    T: Float + ordered_float::FloatCore,
  {
    Point::new(NotNan::new(x).unwrap(), NotNan::new(y).unwrap())
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  /// Determine the direction you have to turn if you walk from `self`
  /// to `q` to `r`.
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: PolygonScalar,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

mod add;
mod sub;

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Orientation::*;

  use num_rational::BigRational;
  use proptest::prelude::*;

  #[test]
  fn test_turns() {
    assert_eq!(
      Point::new(0.0, 0.0).orientation(&Point::new(1.0, 1.0), &Point::new(2.0, 2.0)),
      CoLinear
    );
    assert_eq!(
      Point::new_nn(0.0, 0.0).orientation(&Point::new_nn(1.0, 1.0), &Point::new_nn(2.0, 2.0)),
      CoLinear
    );

    assert_eq!(
      Point::new(0.0, 0.0).orientation(&Point::new(0.0, 1.0), &Point::new(2.0, 2.0)),
      ClockWise
    );
    assert_eq!(
      Point::new(0.0, 0.0).orientation(&Point::new(0.0, 1.0), &Point::new(-2.0, 2.0)),
      CounterClockWise
    );
    assert_eq!(
      Point::new(0.0, 0.0).orientation(&Point::new(0.0, 0.0), &Point::new(0.0, 0.0)),
      CoLinear
    );
  }

  #[test]
  fn collinear_on_axis() {
    assert_eq!(
      Point::new(0.0, 0.0).orientation(&Point::new(1.0, 0.0), &Point::new(2.0, 0.0)),
      CoLinear
    );
    assert_eq!(
      Point::new(1.0, 0.0).orientation(&Point::new(2.0, 0.0), &Point::new(1.0, 0.0)),
      CoLinear
    );
  }

  fn rational(v: i64) -> BigRational {
    BigRational::from_float(v as f64).unwrap()
  }

  proptest! {
    // pt3 = pt2 + (pt2 - pt1) extends the segment exactly, so the three
    // points are collinear in rational arithmetic.
    #[test]
    fn rational_collinear(x1 in -1000i64..1000, y1 in -1000i64..1000,
                          x2 in -1000i64..1000, y2 in -1000i64..1000) {
      let pt1 = Point::new(rational(x1), rational(y1));
      let pt2 = Point::new(rational(x2), rational(y2));
      let diff = &pt2 - &pt1;
      let pt3 = &pt2 + &diff;
      prop_assert!(pt1.orientation(&pt2, &pt3).is_colinear())
    }

    #[test]
    fn rational_not_collinear(x1 in -1000i64..1000, y1 in -1000i64..1000,
                              d in 1i64..1000) {
      let pt1 = Point::new(rational(x1), rational(y1));
      let pt2 = Point::new(rational(x1 + d), rational(y1));
      let pt3 = Point::new(rational(x1 + d + d), rational(y1 + d));
      prop_assert!(!pt1.orientation(&pt2, &pt3).is_colinear())
    }
  }
}

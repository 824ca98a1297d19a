use claims::debug_assert_ok;
use num_traits::{One, Zero};

use super::{Point, PointLocation};
use crate::{Error, Orientation, PolygonScalar};

/// Three borrowed corner points.
pub struct TriangleView<'a, T>([&'a Point<T>; 3]);

impl<'a, T> TriangleView<'a, T>
where
  T: PolygonScalar,
{
  // O(1)
  pub fn new(pts: [&'a Point<T>; 3]) -> TriangleView<'a, T> {
    let triangle = TriangleView(pts);
    debug_assert_ok!(triangle.validate());
    triangle
  }

  pub fn new_unchecked(pts: [&'a Point<T>; 3]) -> TriangleView<'a, T> {
    TriangleView(pts)
  }

  // O(1)
  pub fn validate(&self) -> Result<(), Error> {
    if self.orientation() != Orientation::CounterClockWise {
      Err(Error::ClockWiseViolation)
    } else {
      Ok(())
    }
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::new(a, b, c)
  }

  /// Locate `pt` relative to the triangle by its barycentric coordinates
  /// `(alpha, beta, gamma)`, solved with division by twice the signed area.
  ///
  /// `Inside` requires all three coordinates strictly positive; a point on an
  /// edge or at a corner is `OnBoundary`, never `Inside`. A degenerate
  /// (zero-area) triangle locates every point `Outside`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use earclip::data::{Point, PointLocation, TriangleView};
  /// let a = Point::new(0.0, 0.0);
  /// let b = Point::new(4.0, 0.0);
  /// let c = Point::new(0.0, 4.0);
  /// let trig = TriangleView::new([&a, &b, &c]);
  /// assert_eq!(trig.locate(&Point::new(1.0, 1.0)), PointLocation::Inside);
  /// assert_eq!(trig.locate(&Point::new(2.0, 0.0)), PointLocation::OnBoundary);
  /// assert_eq!(trig.locate(&Point::new(4.0, 4.0)), PointLocation::Outside);
  /// ```
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let [a, b, c] = self.0;
    let ax = a.x_coord().clone();
    let ay = a.y_coord().clone();
    let bx = b.x_coord().clone();
    let by = b.y_coord().clone();
    let cx = c.x_coord().clone();
    let cy = c.y_coord().clone();
    let px = pt.x_coord().clone();
    let py = pt.y_coord().clone();
    let denom = (by.clone() - cy.clone()) * (ax.clone() - cx.clone())
      + (cx.clone() - bx.clone()) * (ay.clone() - cy.clone());
    if denom.is_zero() {
      return PointLocation::Outside;
    }
    let alpha = ((by.clone() - cy.clone()) * (px.clone() - cx.clone())
      + (cx.clone() - bx.clone()) * (py.clone() - cy.clone()))
      / denom.clone();
    let beta = ((cy.clone() - ay.clone()) * (px - cx.clone())
      + (ax.clone() - cx.clone()) * (py - cy.clone()))
      / denom;
    let gamma = T::one() - alpha.clone() - beta.clone();
    let zero = T::zero();
    if alpha > zero && beta > zero && gamma > zero {
      PointLocation::Inside
    } else if alpha < zero || beta < zero || gamma < zero {
      PointLocation::Outside
    } else {
      PointLocation::OnBoundary
    }
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / (T::one() + T::one())
  }

  pub fn signed_area_2x(&self) -> T {
    let [a, b, c] = self.0;
    let ax = a.x_coord().clone();
    let ay = a.y_coord().clone();
    let bx = b.x_coord().clone();
    let by = b.y_coord().clone();
    let cx = c.x_coord().clone();
    let cy = c.y_coord().clone();
    ax.clone() * by.clone() - bx.clone() * ay.clone() + bx * cy.clone() - cx.clone() * by + cx * ay
      - ax * cy
  }
}

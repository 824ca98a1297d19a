use array_init::array_init;
use std::ops::Index;
use std::ops::Sub;

use super::Point;
use crate::data::Vector;

// point - point = vector
impl<'a, 'b, T> Sub<&'a Point<T>> for &'b Point<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T>;

  fn sub(self: &'b Point<T>, other: &'a Point<T>) -> Self::Output {
    Vector(array_init(|i| {
      self.array.index(i).clone() - other.array.index(i).clone()
    }))
  }
}

impl<T> Sub<Point<T>> for Point<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T>;

  fn sub(self: Point<T>, other: Point<T>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}

// Strategies for generating shrinkable simple polygons.
use proptest::prelude::*;

use crate::data::{Point, Polygon};
use crate::Orientation;

/// Generate a simple polygon by sorting a random point cloud around its
/// centroid (star polygonization). Grid coordinates keep every position
/// exactly representable in `f64`, so exact-arithmetic checks against the
/// generated polygons are meaningful.
pub fn simple_polygon(max_vertices: usize) -> impl Strategy<Value = Polygon<f64>> {
  prop::collection::vec((-1000i32..1000, -1000i32..1000), 3..max_vertices)
    .prop_filter_map("point cloud does not polygonize", polygonize_star)
}

// Angle-sorting around an interior point yields a simple polygon as long as
// no two cloud points share a ray from that point. Clouds that cannot be
// polygonized that way (duplicates, angle ties, collinear runs) are rejected
// and regenerated rather than repaired.
fn polygonize_star(cloud: Vec<(i32, i32)>) -> Option<Polygon<f64>> {
  let mut points: Vec<Point<f64>> = cloud
    .into_iter()
    .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
    .collect();
  points.sort_by(|a, b| a.partial_cmp(b).unwrap());
  points.dedup();
  if points.len() < 3 {
    return None;
  }

  let n = points.len() as f64;
  let centroid_x = points.iter().map(|p| *p.x_coord()).sum::<f64>() / n;
  let centroid_y = points.iter().map(|p| *p.y_coord()).sum::<f64>() / n;
  if points
    .iter()
    .any(|p| *p.x_coord() == centroid_x && *p.y_coord() == centroid_y)
  {
    return None;
  }

  let mut keyed: Vec<(f64, f64, Point<f64>)> = points
    .into_iter()
    .map(|p| {
      let dx = p.x_coord() - centroid_x;
      let dy = p.y_coord() - centroid_y;
      (dy.atan2(dx), dx * dx + dy * dy, p)
    })
    .collect();
  keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
  if keyed.windows(2).any(|w| w[0].0 == w[1].0) {
    return None;
  }

  let points: Vec<Point<f64>> = keyed.into_iter().map(|(_, _, p)| p).collect();
  let len = points.len();
  for i in 0..len {
    let triple = Orientation::new(
      &points[i],
      &points[(i + 1) % len],
      &points[(i + 2) % len],
    );
    if triple.is_colinear() {
      return None;
    }
  }

  Polygon::new(points).ok()
}

#[cfg(test)]
mod tests {
  use super::*;
  use num_traits::Zero;

  proptest! {
    // The generator only emits counter-clockwise polygons with positive area
    // and no collinear corner.
    #[test]
    fn generated_polygons_are_sane(polygon in simple_polygon(24)) {
      prop_assert!(polygon.len() >= 3);
      prop_assert!(polygon.signed_area_2x() > f64::zero());
      let ids: Vec<usize> = polygon.boundary_slice().iter().map(|v| v.usize()).collect();
      let mut sorted = ids.clone();
      sorted.sort_unstable();
      prop_assert_eq!(sorted, (0..polygon.len()).collect::<Vec<usize>>());
    }
  }
}

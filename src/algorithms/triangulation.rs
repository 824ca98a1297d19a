use crate::data::{Point, PointLocation, Polygon, TriangleView, VertexId};
use crate::{Error, Orientation, PolygonScalar};

/// Triangulate a simple polygon by ear clipping.
///
/// Returns a flat list of vertex ids into the caller's original point
/// sequence, three consecutive ids per triangle, `3 * (n - 2)` ids in total.
/// The emitted triangles partition the polygon.
///
/// Every vertex is classified once up front; after each clip only the two
/// vertices flanking the removal site are re-classified, since only their
/// neighborhoods changed. The scan for the next ear restarts from the head of
/// the boundary after every clip, so for a fixed input the clip sequence is
/// deterministic. Classification inspects every remaining vertex, which makes
/// the whole run quadratic to cubic; acceptable for the polygon sizes this is
/// meant for.
///
/// Simplicity of the boundary is a precondition. If it is violated the scan
/// can run out of ears, in which case the triangulation stops with
/// [Error::NoEarFound] rather than looping forever.
///
/// ```rust
/// use earclip::algorithms::triangulate_points;
/// use earclip::data::Point;
///
/// let square = vec![
///   Point::new(0.0, 0.0),
///   Point::new(4.0, 0.0),
///   Point::new(4.0, 4.0),
///   Point::new(0.0, 4.0),
/// ];
/// let triangles = triangulate_points(square).unwrap();
/// assert_eq!(triangles.len(), 6);
/// ```
pub fn triangulate<T>(polygon: &Polygon<T>) -> Result<Vec<VertexId>, Error>
where
  T: PolygonScalar,
{
  let order = polygon.boundary_slice();
  let len = order.len();
  if len < 3 {
    return Err(Error::InsufficientVertices);
  }
  let mut ring = VertexRing::new(order);
  let mut ears = vec![false; len];
  for &id in order {
    let vertex = id.usize();
    ears[vertex] = is_ear(polygon, &ring, ring.prev(vertex), vertex, ring.next(vertex));
  }
  let mut head = order[0].usize();
  let mut live = len;
  let mut indices = Vec::with_capacity(3 * (len - 2));
  while live >= 3 {
    // Find the first vertex in boundary order whose successor is an ear.
    let mut focus = head;
    let mut clipped = false;
    for _ in 0..live {
      let ear = ring.next(focus);
      if ears[ear] {
        let after = ring.next(ear);
        indices.push(VertexId(focus));
        indices.push(VertexId(ear));
        indices.push(VertexId(after));
        ring.delete(ear);
        live -= 1;
        if ear == head {
          head = after;
        }
        if live >= 3 {
          // The clip changed the neighborhoods of exactly these two.
          ears[focus] = is_ear(polygon, &ring, ring.prev(focus), focus, after);
          ears[after] = is_ear(polygon, &ring, focus, after, ring.next(after));
        }
        clipped = true;
        break;
      }
      focus = ear;
    }
    if !clipped {
      return Err(Error::NoEarFound);
    }
  }
  Ok(indices)
}

/// Build the polygon (canonicalizing its winding) and triangulate it.
pub fn triangulate_points<T>(points: Vec<Point<T>>) -> Result<Vec<VertexId>, Error>
where
  T: PolygonScalar,
{
  let polygon = Polygon::new(points)?;
  triangulate(&polygon)
}

// A vertex is an ear when its corner triangle turns counter-clockwise (or is
// degenerate) and no other remaining vertex lies strictly inside it. Points
// on the triangle boundary do not block an ear.
fn is_ear<T>(polygon: &Polygon<T>, ring: &VertexRing, prev: usize, focus: usize, next: usize) -> bool
where
  T: PolygonScalar,
{
  let trig = TriangleView::new_unchecked([
    polygon.point(VertexId(prev)),
    polygon.point(VertexId(focus)),
    polygon.point(VertexId(next)),
  ]);
  if trig.orientation() == Orientation::ClockWise {
    return false;
  }
  let mut other = ring.next(next);
  while other != prev {
    if trig.locate(polygon.point(VertexId(other))) == PointLocation::Inside {
      return false;
    }
    other = ring.next(other);
  }
  true
}

///////////////////////////////////////////////////////////////////////////////
// Doubly-linked vertex ring over a fixed arena indexed by vertex id.
//
// Deleting a vertex unlinks it in O(1); ids of the remaining vertices never
// shift.

struct VertexRing {
  prev: Vec<usize>,
  next: Vec<usize>,
}

impl VertexRing {
  fn new(order: &[VertexId]) -> VertexRing {
    let size = order.len();
    let mut prev = vec![0; size];
    let mut next = vec![0; size];
    for i in 0..size {
      let this = order[i].usize();
      let succ = order[(i + 1) % size].usize();
      next[this] = succ;
      prev[succ] = this;
    }
    VertexRing { prev, next }
  }

  fn prev(&self, vertex: usize) -> usize {
    self.prev[vertex]
  }

  fn next(&self, vertex: usize) -> usize {
    self.next[vertex]
  }

  fn delete(&mut self, vertex: usize) {
    let prev = self.prev[vertex];
    let next = self.next[vertex];
    self.next[prev] = next;
    self.prev[next] = prev;
  }
}

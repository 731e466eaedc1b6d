use crate::data::Point;
use crate::PolygonScalar;

/// A polygon carved out of the 2D plane by one or more rings of points.
///
/// The rings are stored as one flat, ordered point sequence in which
/// consecutive points form edges. When the first and last point of the
/// sequence are equal, the sequence is a single closed ring. Otherwise the
/// sequence starts with the bounding ring, terminated by a repeat of its
/// first point, followed by hole rings, each terminated by a repeat of its
/// own first point. Ring boundaries are recognised purely by coordinate
/// equality; no validation of the encoding or of the geometry
/// (self-intersection, winding order) is performed.
#[derive(Debug, Clone)]
pub struct Polygon<T = f64> {
  points: Vec<Point<T>>,
}

impl<T> Polygon<T> {
  /// Wraps `points` without copying or validation. The sequence is taken
  /// to be in ring order, the last point forming an edge with the first.
  pub fn new(points: Vec<Point<T>>) -> Polygon<T> {
    Polygon { points }
  }

  /// Builds the flat ring encoding from an explicit bounding ring plus
  /// hole rings. Each ring is closed by repeating its first point; empty
  /// rings are skipped.
  pub fn with_holes(boundary: Vec<Point<T>>, holes: Vec<Vec<Point<T>>>) -> Polygon<T>
  where
    T: Copy,
  {
    let len = boundary.len() + 1 + holes.iter().map(|ring| ring.len() + 1).sum::<usize>();
    let mut points = Vec::with_capacity(len);
    for ring in std::iter::once(boundary).chain(holes) {
      let close = ring.first().copied();
      points.extend(ring);
      if let Some(first) = close {
        points.push(first);
      }
    }
    Polygon { points }
  }

  /// Read-only view of the point sequence.
  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  /// Appends `point` to the end of the sequence.
  ///
  /// This is the only mutating operation. The point sequence carries no
  /// internal locking: callers sharing a polygon across threads must
  /// serialise `add` against every other call, including other `add`s.
  /// Concurrent reads without a writer are safe.
  pub fn add(&mut self, point: Point<T>) {
    self.points.push(point);
  }

  /// Whether the polygon has enough points to close a ring.
  ///
  /// A point-count heuristic only: three points are necessary for a closed
  /// ring, but nothing checks that the edges actually trace one, nor that
  /// the multi-ring encoding is well formed.
  pub fn is_closed(&self) -> bool {
    self.points.len() >= 3
  }
}

impl<T: PolygonScalar> Polygon<T> {
  /// Whether `point` lies inside the polygon, holes excluded, under the
  /// even-odd rule: a conceptual ray is cast from the query point and the
  /// boundary crossings are counted; an odd count means inside.
  ///
  /// An unclosed polygon (fewer than three points) contains nothing.
  /// Queries on the boundary itself resolve through the perturbation step
  /// of the crossing test and may fall on either side; results are stable
  /// for a given polygon and query.
  pub fn contains(&self, point: &Point<T>) -> bool {
    if !self.is_closed() {
      return false;
    }

    let last = self.points.len() - 1;
    let mut contains = false;

    if self.points[last] == self.points[0] {
      // A single closed ring: every consecutive pair is a boundary edge.
      for i in 1..self.points.len() {
        if intersects_with_raycast(point, &self.points[i - 1], &self.points[i]) {
          contains = !contains;
        }
      }
    } else {
      // The first point anchors the bounding ring. A later edge starting
      // at that point is the connector into the next ring, not part of
      // any outline, and must not count as a crossing.
      let anchor = self.points[0];
      for i in 1..self.points.len() {
        if i != 1 && self.points[i - 1] == anchor {
          continue;
        }
        if intersects_with_raycast(point, &self.points[i - 1], &self.points[i]) {
          contains = !contains;
        }
      }
    }

    contains
  }

  /// Smallest axis-aligned rectangle covering every point, as a
  /// `(min, max)` corner pair. `None` for an empty polygon.
  pub fn bounding_box(&self) -> Option<(Point<T>, Point<T>)> {
    let first = self.points.first()?;
    let (mut min_lat, mut min_lng) = (first.lat(), first.lng());
    let (mut max_lat, mut max_lng) = (min_lat, min_lng);
    for point in &self.points[1..] {
      min_lat = min_lat.min(point.lat());
      min_lng = min_lng.min(point.lng());
      max_lat = max_lat.max(point.lat());
      max_lng = max_lng.max(point.lng());
    }
    Some((Point::new(min_lat, min_lng), Point::new(max_lat, max_lng)))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Raycast edge test

// Whether the ray cast from `point` crosses the edge drawn between `start`
// and `end`. One call per edge per containment query.
fn intersects_with_raycast<T: PolygonScalar>(
  point: &Point<T>,
  start: &Point<T>,
  end: &Point<T>,
) -> bool {
  // Canonicalise the edge along the lng axis.
  let (start, end) = if start.lng() > end.lng() {
    (end, start)
  } else {
    (start, end)
  };

  // A query lng exactly on a vertex makes the crossing count ambiguous.
  // Step to the next representable lng until the ambiguity is gone.
  let mut point = *point;
  while point.lng() == start.lng() || point.lng() == end.lng() {
    point = Point::new(point.lat(), point.lng().next_toward_infinity());
  }

  if point.lng() < start.lng() || point.lng() > end.lng() {
    return false;
  }

  if start.lat() > end.lat() {
    if point.lat() > start.lat() {
      return false;
    }
    if point.lat() < end.lat() {
      return true;
    }
  } else {
    if point.lat() > end.lat() {
      return false;
    }
    if point.lat() < start.lat() {
      return true;
    }
  }

  // The divisor is zero when the perturbed point shares its lat with
  // `start`; IEEE-754 infinities and NaN flow through the comparison, and
  // a NaN slope compares false, counting as no crossing.
  let ray_slope = (point.lng() - start.lng()) / (point.lat() - start.lat());
  let diag_slope = (end.lng() - start.lng()) / (end.lat() - start.lat());

  ray_slope >= diag_slope
}

///////////////////////////////////////////////////////////////////////////////
// Tests

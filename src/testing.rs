// Strategies for the property tests: finite coordinates, points, and
// closed single-ring polygons.
use proptest::collection::vec;
use proptest::prelude::*;

use crate::data::{Point, Polygon};

use std::ops::Range;

// Coordinates stay inside a finite window: the raycast perturbation steps
// lng toward positive infinity and is only guaranteed to terminate for
// finite values.
pub fn coord() -> impl Strategy<Value = f64> {
  -1.0e6..1.0e6
}

pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  (coord(), coord()).prop_map(|(lat, lng)| Point::new(lat, lng))
}

// A ring of `size` random points, closed by repeating the first point.
pub fn closed_ring(size: Range<usize>) -> impl Strategy<Value = Polygon<f64>> {
  vec(any_point(), size).prop_map(|mut points| {
    if let Some(&first) = points.first() {
      points.push(first);
    }
    Polygon::new(points)
  })
}

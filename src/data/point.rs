use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// An immutable geographic coordinate.
///
/// Coordinates are plain floating-point values and are not validated: NaN
/// and infinite values are accepted on construction and flow through
/// containment queries with IEEE-754 semantics.
///
/// Two points are equal iff both coordinates compare equal exactly.
/// [`Polygon`](crate::data::Polygon) relies on this to recognise the
/// repeated ring points in its flattened multi-ring encoding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Point<T = f64> {
  lat: T,
  lng: T,
}

impl<T> Point<T> {
  pub const fn new(lat: T, lng: T) -> Point<T> {
    Point { lat, lng }
  }
}

impl<T: Copy> Point<T> {
  pub fn lat(&self) -> T {
    self.lat
  }

  pub fn lng(&self) -> T {
    self.lng
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point::new(point.0, point.1)
  }
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      lat: rng.gen(),
      lng: rng.gen(),
    }
  }
}

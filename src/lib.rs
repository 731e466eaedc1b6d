//! Even-odd ray-casting containment tests for 2D geographic polygons,
//! including polygons with holes.
#![deny(clippy::cast_lossless)]
use num_traits::Float;
use std::fmt::Debug;

pub mod data;

pub use data::{Point, Polygon};

/// Coordinate scalar usable in ray-casting queries.
///
/// Arithmetic and comparisons come from [`num_traits::Float`]; the one extra
/// operation is stepping to the next representable value, which the raycast
/// uses to nudge a query point off an exactly-shared vertex coordinate.
pub trait PolygonScalar: Float + Debug {
  /// The next representable value in the direction of positive infinity.
  ///
  /// Total over the whole type: NaN maps to NaN, positive infinity to
  /// itself, and both zeros to the smallest positive subnormal.
  fn next_toward_infinity(self) -> Self;
}

macro_rules! floating_precision {
  ( $ty:ty, $bits:ty ) => {
    impl PolygonScalar for $ty {
      fn next_toward_infinity(self) -> $ty {
        let bits = self.to_bits();
        if self.is_nan() || bits == <$ty>::INFINITY.to_bits() {
          return self;
        }
        // With the sign bit cleared, the ordering of the remaining bits
        // matches the ordering of the magnitudes.
        let abs = bits & (<$bits>::MAX >> 1);
        let next = if abs == 0 {
          1
        } else if bits == abs {
          bits + 1
        } else {
          bits - 1
        };
        <$ty>::from_bits(next)
      }
    }
  };
}

floating_precision!(f32, u32);
floating_precision!(f64, u64);

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests {
  use super::*;

  use claims::assert_gt;
  use proptest::prelude::*;

  proptest! {
    #[test]
    fn next_toward_infinity_increases_f64(
      x in prop::num::f64::POSITIVE
        | prop::num::f64::NEGATIVE
        | prop::num::f64::NORMAL
        | prop::num::f64::SUBNORMAL
        | prop::num::f64::ZERO,
    ) {
      assert_gt!(x.next_toward_infinity(), x);
    }

    #[test]
    fn next_toward_infinity_increases_f32(
      x in prop::num::f32::POSITIVE
        | prop::num::f32::NEGATIVE
        | prop::num::f32::NORMAL
        | prop::num::f32::SUBNORMAL
        | prop::num::f32::ZERO,
    ) {
      assert_gt!(x.next_toward_infinity(), x);
    }
  }

  #[test]
  fn next_toward_infinity_endpoints() {
    assert!(f64::NAN.next_toward_infinity().is_nan());
    assert_eq!(f64::INFINITY.next_toward_infinity(), f64::INFINITY);
    assert_eq!(f64::NEG_INFINITY.next_toward_infinity(), f64::MIN);
    assert_eq!(f64::MAX.next_toward_infinity(), f64::INFINITY);
  }

  #[test]
  fn next_toward_infinity_near_zero() {
    assert_eq!(0.0_f64.next_toward_infinity(), f64::from_bits(1));
    assert_eq!((-0.0_f64).next_toward_infinity(), f64::from_bits(1));
    assert_eq!(f64::from_bits(1).next_toward_infinity(), f64::from_bits(2));
  }

  #[test]
  fn next_toward_infinity_unit() {
    assert_eq!(1.0_f64.next_toward_infinity(), 1.0 + f64::EPSILON);
    assert_eq!(1.0_f32.next_toward_infinity(), 1.0 + f32::EPSILON);
    assert_gt!(-1.0_f64.next_toward_infinity(), -1.0);
  }
}


//! Unary operations. These act on the value alone and carry the unit
//! label through unchanged, so they never fail.

use crate::quantity::Quantity;

use std::ops::Neg;

impl Quantity {
  /// Unary plus. Returns an identical quantity, metadata included.
  pub fn pos(&self) -> Quantity {
    self.clone()
  }

  pub fn neg(&self) -> Quantity {
    self.map_value(|x| -x)
  }

  pub fn abs(&self) -> Quantity {
    self.map_value(f64::abs)
  }

  /// Rounds to `ndigits` decimal places, or to an integer if
  /// `ndigits` is `None`. Ties round to the even neighbor, so
  /// `round(2.5) == 2` and `round(3.5) == 4`. A negative `ndigits`
  /// rounds to tens, hundreds, and so on.
  pub fn round(&self, ndigits: Option<i32>) -> Quantity {
    self.map_value(|x| round_half_even(x, ndigits.unwrap_or(0)))
  }

  pub fn trunc(&self) -> Quantity {
    self.map_value(f64::trunc)
  }

  pub fn floor(&self) -> Quantity {
    self.map_value(f64::floor)
  }

  pub fn ceil(&self) -> Quantity {
    self.map_value(f64::ceil)
  }
}

fn round_half_even(x: f64, ndigits: i32) -> f64 {
  if ndigits == 0 {
    return x.round_ties_even();
  }
  let scale = 10f64.powi(ndigits);
  if scale == 0.0 {
    // Rounding to a power of ten beyond the range of `f64`.
    return 0.0f64.copysign(x);
  }
  let scaled = x * scale;
  if !scaled.is_finite() {
    // Too many digits requested to make a difference.
    return x;
  }
  scaled.round_ties_even() / scale
}

impl Neg for Quantity {
  type Output = Quantity;

  fn neg(self) -> Quantity {
    Quantity::neg(&self)
  }
}

impl Neg for &Quantity {
  type Output = Quantity;

  fn neg(self) -> Quantity {
    Quantity::neg(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{assert_strict_eq, assert_strict_ne};

  use approx::assert_relative_eq;

  #[test]
  fn test_pos() {
    let q = Quantity::new(1.5, "V").with_name("Vin");
    assert_strict_eq!(q.pos(), q);
  }

  #[test]
  fn test_neg() {
    assert_eq!(Quantity::new(1.5, "V").neg(), Quantity::new(-1.5, "V"));
    assert_eq!(-Quantity::new(1.5, "V"), Quantity::new(-1.5, "V"));
    assert_eq!(-&Quantity::new(-2.0, "A"), Quantity::new(2.0, "A"));
  }

  #[test]
  fn test_abs() {
    assert_eq!(Quantity::new(-1.5, "V").abs(), Quantity::new(1.5, "V"));
    assert_eq!(Quantity::new(1.5, "V").abs(), Quantity::new(1.5, "V"));
  }

  #[test]
  fn test_round() {
    assert_eq!(Quantity::new(1.6, "V").round(None), Quantity::new(2.0, "V"));
    assert_eq!(Quantity::new(-1.6, "V").round(None), Quantity::new(-2.0, "V"));
    assert_eq!(Quantity::new(2.5, "V").round(None), Quantity::new(2.0, "V"));
    assert_eq!(Quantity::new(3.5, "V").round(None), Quantity::new(4.0, "V"));
  }

  #[test]
  fn test_round_to_digits() {
    assert_relative_eq!(Quantity::new(1.2345, "m").round(Some(2)).value(), 1.23);
    assert_relative_eq!(Quantity::new(1234.0, "m").round(Some(-2)).value(), 1200.0);
    assert_eq!(Quantity::new(1.2345, "m").round(Some(2)).units(), "m");
    assert_eq!(Quantity::new(1.5, "m").round(Some(400)), Quantity::new(1.5, "m"));
  }

  #[test]
  fn test_round_to_huge_negative_digits() {
    assert_eq!(Quantity::new(1234.0, "m").round(Some(-400)), Quantity::new(0.0, "m"));
    let rounded = Quantity::new(-1234.0, "m").round(Some(-400)).value();
    assert_eq!(rounded, 0.0);
    assert!(rounded.is_sign_negative());
  }

  #[test]
  fn test_trunc_floor_ceil() {
    let q = Quantity::new(-1.5, "s");
    assert_eq!(q.trunc(), Quantity::new(-1.0, "s"));
    assert_eq!(q.floor(), Quantity::new(-2.0, "s"));
    assert_eq!(q.ceil(), Quantity::new(-1.0, "s"));
  }

  #[test]
  fn test_unary_operations_preserve_units() {
    let q = &Quantity::new(7.25, "m/s");
    for result in [q.pos(), q.neg(), q.abs(), q.round(None), q.trunc(), q.floor(), q.ceil()] {
      assert_eq!(result.units(), "m/s");
    }
  }

  #[test]
  fn test_unary_operations_drop_metadata_except_pos() {
    let q = Quantity::new(7.25, "m/s").with_name("speed");
    assert_strict_ne!(q.abs(), q);
    assert_strict_eq!(q.abs(), Quantity::new(7.25, "m/s"));
  }
}

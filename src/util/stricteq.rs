
/// Equality that also compares what `PartialEq` deliberately skips.
///
/// For [`Quantity`](crate::quantity::Quantity), `PartialEq` compares
/// the value and unit label, while `StrictEq` also compares the name
/// and description. `a.strict_eq(b)` implies `a == b`.
pub trait StrictEq: PartialEq {
  fn strict_eq(&self, other: &Self) -> bool;
}

#[macro_export]
macro_rules! assert_strict_eq {
  ($left:expr, $right:expr $(,)?) => {
    match (&$left, &$right) {
      (left_val, right_val) => {
        assert!(
          $crate::util::stricteq::StrictEq::strict_eq(left_val, right_val),
          "assertion failed: strictly equal\n  left: {:?}\n right: {:?}",
          left_val,
          right_val,
        )
      }
    }
  }
}

#[macro_export]
macro_rules! assert_strict_ne {
  ($left:expr, $right:expr $(,)?) => {
    match (&$left, &$right) {
      (left_val, right_val) => {
        assert!(
          !$crate::util::stricteq::StrictEq::strict_eq(left_val, right_val),
          "assertion failed: not strictly equal\n  left: {:?}\n right: {:?}",
          left_val,
          right_val,
        )
      }
    }
  }
}


//! Error conditions raised by unit-propagating arithmetic.

use thiserror::Error;

/// The two error kinds produced by arithmetic on quantities. The
/// rendered message text of each variant is stable, since callers
/// compare it verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnitError {
  /// An operand could not be interpreted as a number or quantity.
  /// Carries the offending input text.
  #[error("{0}: not a valid number.")]
  InvalidNumber(String),
  /// The unit labels of the two operands cannot be reconciled for
  /// the requested operation. Carries the two operands, rendered with
  /// their `Display` impls.
  #[error("incompatible units ({0} and {1}).")]
  IncompatibleUnits(String, String),
}

impl UnitError {
  pub fn invalid_number(input: impl Into<String>) -> Self {
    Self::InvalidNumber(input.into())
  }

  pub fn incompatible_units(left: impl Into<String>, right: impl Into<String>) -> Self {
    Self::IncompatibleUnits(left.into(), right.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_number_message() {
    let err = UnitError::invalid_number("abc");
    assert_eq!(err.to_string(), "abc: not a valid number.");
  }

  #[test]
  fn test_incompatible_units_message() {
    let err = UnitError::incompatible_units("1 V", "2 A");
    assert_eq!(err.to_string(), "incompatible units (1 V and 2 A).");
  }

  #[test]
  fn test_incompatible_units_message_with_bare_number() {
    let err = UnitError::incompatible_units("1 V", "2");
    assert_eq!(err.to_string(), "incompatible units (1 V and 2).");
  }
}

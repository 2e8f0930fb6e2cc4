
use crate::error::UnitError;
use crate::mode::PropagationMode;
use crate::quantity::{Quantity, Operand, IntoOperand};

use tracing::debug;

use std::cmp::Ordering;

impl PropagationMode {
  /// Compares the values of two quantities.
  ///
  /// The simplification table plays no part here. Unless checking is
  /// off, the labels must match exactly, even under the lenient
  /// policy. The one exception is a bare number on the right, which
  /// is accepted unless the policy is strict.
  ///
  /// Returns `Ok(None)` if either value is NaN.
  pub fn compare<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> Result<Option<Ordering>, UnitError> {
    let rhs = rhs.into_operand()?;
    self.check_comparable(lhs, &rhs)?;
    Ok(lhs.value().partial_cmp(&rhs.value()))
  }

  pub fn lt<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> Result<bool, UnitError> {
    Ok(matches!(self.compare(lhs, rhs)?, Some(Ordering::Less)))
  }

  pub fn le<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> Result<bool, UnitError> {
    Ok(matches!(self.compare(lhs, rhs)?, Some(Ordering::Less | Ordering::Equal)))
  }

  pub fn gt<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> Result<bool, UnitError> {
    Ok(matches!(self.compare(lhs, rhs)?, Some(Ordering::Greater)))
  }

  pub fn ge<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> Result<bool, UnitError> {
    Ok(matches!(self.compare(lhs, rhs)?, Some(Ordering::Greater | Ordering::Equal)))
  }

  /// Equality of values. Never fails: an operand which cannot be
  /// coerced, or whose units do not match, is simply unequal.
  pub fn eq<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> bool {
    self.try_eq(lhs, rhs).unwrap_or(false)
  }

  /// Inequality of values. Never fails, and is always the negation of
  /// [`PropagationMode::eq`].
  pub fn ne<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> bool {
    !self.eq(lhs, rhs)
  }

  fn try_eq<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> Result<bool, UnitError> {
    let rhs = rhs.into_operand()?;
    self.check_comparable(lhs, &rhs)?;
    Ok(lhs.value() == rhs.value())
  }

  fn check_comparable(&self, lhs: &Quantity, rhs: &Operand) -> Result<(), UnitError> {
    if self.policy().rejects_comparison(lhs.units(), rhs.units()) {
      debug!(left = lhs.units(), right = rhs.units_or_empty(), policy = %self.policy(), "rejected comparison of mismatched units");
      return Err(UnitError::incompatible_units(lhs.to_string(), rhs.to_string()));
    }
    Ok(())
  }
}

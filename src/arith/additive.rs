
use crate::error::UnitError;
use crate::mode::PropagationMode;
use crate::quantity::{Quantity, Operand, IntoOperand};
use crate::units::{Category, Lookup, normalize};

use tracing::{debug, trace};

impl PropagationMode {
  /// `lhs + rhs`.
  pub fn add<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> Result<Quantity, UnitError> {
    self.additive(lhs, rhs.into_operand()?, |a, b| a + b)
  }

  /// `lhs - rhs`.
  pub fn sub<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> Result<Quantity, UnitError> {
    self.additive(lhs, rhs.into_operand()?, |a, b| a - b)
  }

  /// `other + this`, where the quantity is on the right-hand side of
  /// the expression. The unit is resolved exactly as for
  /// [`PropagationMode::add`], and the result inherits the metadata
  /// of `this`.
  pub fn radd<'a>(&self, this: &Quantity, other: impl IntoOperand<'a>) -> Result<Quantity, UnitError> {
    self.additive(this, other.into_operand()?, |a, b| b + a)
  }

  /// `other - this`, where the quantity is on the right-hand side of
  /// the expression.
  pub fn rsub<'a>(&self, this: &Quantity, other: impl IntoOperand<'a>) -> Result<Quantity, UnitError> {
    self.additive(this, other.into_operand()?, |a, b| b - a)
  }

  // `op` always receives the invoking quantity's value first.
  fn additive(&self, this: &Quantity, other: Operand, op: impl FnOnce(f64, f64) -> f64) -> Result<Quantity, UnitError> {
    let Some(units) = self.resolve_additive_units(this.units(), other.units_or_empty()) else {
      return Err(UnitError::incompatible_units(this.to_string(), other.to_string()));
    };
    let value = op(this.value(), other.value());
    Ok(Quantity::new(value, units).inheriting(this))
  }

  /// Resolves the unit of a sum or difference of quantities with the
  /// given labels, or `None` if the labels cannot be added.
  ///
  /// A table entry for the pair always wins, whether it names a unit
  /// or forbids the combination. Without an entry, the checking
  /// policy decides whether the labels are compatible, and the result
  /// takes the left label unless it is empty.
  pub fn resolve_additive_units(&self, left: &str, right: &str) -> Option<String> {
    let (key_left, key_right) = normalize(left, right, Category::Additive);
    match self.table().lookup(Category::Additive, &key_left, &key_right) {
      Lookup::Unit(units) => {
        trace!(left, right, units, "additive simplification");
        Some(units.to_owned())
      }
      Lookup::Forbidden => {
        debug!(left, right, "additive combination forbidden by simplification table");
        None
      }
      Lookup::Miss => {
        if self.policy().rejects_additive(left, right) {
          debug!(left, right, policy = %self.policy(), "rejected additive unit mismatch");
          return None;
        }
        let units = if left.is_empty() { right } else { left };
        Some(units.to_owned())
      }
    }
  }
}

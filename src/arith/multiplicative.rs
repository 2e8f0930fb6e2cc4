
use crate::error::UnitError;
use crate::mode::PropagationMode;
use crate::quantity::{Quantity, Operand, IntoOperand};
use crate::units::{Category, Lookup, normalize, PRODUCT_SEP, QUOTIENT_SEP, RECIPROCAL};

use itertools::Itertools;
use tracing::{debug, trace};

impl PropagationMode {
  /// `lhs * rhs`. Multiplication never rejects a pair of units: a
  /// product with no table entry is written out in full.
  pub fn mul<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> Result<Quantity, UnitError> {
    let rhs = rhs.into_operand()?;
    let units = self.resolve_product_units(lhs.units(), rhs.units_or_empty());
    Ok(Quantity::new(lhs.value() * rhs.value(), units).inheriting(lhs))
  }

  /// `other * this`. Identical to [`PropagationMode::mul`], since
  /// products are commutative in both value and unit.
  pub fn rmul<'a>(&self, this: &Quantity, other: impl IntoOperand<'a>) -> Result<Quantity, UnitError> {
    self.mul(this, other)
  }

  /// `lhs / rhs`. Division by zero follows IEEE-754 and is not an
  /// error.
  pub fn div<'a>(&self, lhs: &Quantity, rhs: impl IntoOperand<'a>) -> Result<Quantity, UnitError> {
    let rhs = rhs.into_operand()?;
    let Some(units) = self.resolve_quotient_units(lhs.units(), rhs.units_or_empty()) else {
      return Err(UnitError::incompatible_units(lhs.to_string(), rhs.to_string()));
    };
    Ok(Quantity::new(lhs.value() / rhs.value(), units).inheriting(lhs))
  }

  /// `other / this`, where the quantity is the divisor. The coerced
  /// `other` is the numerator, and the result inherits the metadata
  /// of `this`.
  pub fn rdiv<'a>(&self, this: &Quantity, other: impl IntoOperand<'a>) -> Result<Quantity, UnitError> {
    let other: Operand = other.into_operand()?;
    let Some(units) = self.resolve_quotient_units(other.units_or_empty(), this.units()) else {
      return Err(UnitError::incompatible_units(other.to_string(), this.to_string()));
    };
    Ok(Quantity::new(other.value() / this.value(), units).inheriting(this))
  }

  /// Resolves the unit of a product of quantities with the given
  /// labels. Without a table entry, the grouped labels are joined
  /// with the product separator, skipping empty labels.
  pub fn resolve_product_units(&self, left: &str, right: &str) -> String {
    let (key_left, key_right) = normalize(left, right, Category::Multiply);
    match self.table().lookup(Category::Multiply, &key_left, &key_right) {
      Lookup::Unit(units) => {
        trace!(left, right, units, "product simplification");
        units.to_owned()
      }
      Lookup::Forbidden | Lookup::Miss => {
        [key_left, key_right].into_iter()
          .filter(|units| !units.is_empty())
          .join(PRODUCT_SEP)
      }
    }
  }

  /// Resolves the unit of a quotient with the given numerator and
  /// denominator labels, or `None` if the table forbids the pair.
  ///
  /// Without a table entry: identical labels cancel; otherwise a
  /// non-empty numerator is joined to a non-empty denominator with
  /// the quotient separator; and a lone denominator is marked as a
  /// reciprocal.
  pub fn resolve_quotient_units(&self, numerator: &str, denominator: &str) -> Option<String> {
    let (num, den) = normalize(numerator, denominator, Category::Divide);
    let units = match self.table().lookup(Category::Divide, &num, &den) {
      Lookup::Unit(units) => {
        trace!(numerator, denominator, units, "quotient simplification");
        units.to_owned()
      }
      Lookup::Forbidden => {
        debug!(numerator, denominator, "quotient forbidden by simplification table");
        return None;
      }
      Lookup::Miss if !num.is_empty() => {
        if num == den {
          String::new()
        } else if den.is_empty() {
          num
        } else {
          format!("{num}{QUOTIENT_SEP}{den}")
        }
      }
      Lookup::Miss if !den.is_empty() => {
        format!("{den}{RECIPROCAL}")
      }
      Lookup::Miss => String::new(),
    };
    Some(units)
  }
}


use super::base::Quantity;
use crate::error::UnitError;

use std::borrow::Cow;
use std::fmt::{self, Formatter, Display};

/// The right-hand side of an arithmetic operation, after coercion.
///
/// A bare number is distinct from a unitless quantity: a quantity
/// always has a label (possibly empty), while a bare number has none.
/// The distinction matters to ordering comparisons under some
/// checking policies.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a> {
  Quantity(Cow<'a, Quantity>),
  Bare(f64),
}

/// Conversion of a value into an [`Operand`]. This is the single
/// coercion step performed at the boundary of every arithmetic
/// operation, before any unit resolution happens.
///
/// Quantities and numbers always convert. Strings are parsed as
/// quantity literals, and a string which cannot be parsed produces
/// [`UnitError::InvalidNumber`].
pub trait IntoOperand<'a> {
  fn into_operand(self) -> Result<Operand<'a>, UnitError>;
}

impl<'a> Operand<'a> {
  pub fn value(&self) -> f64 {
    match self {
      Operand::Quantity(q) => q.value(),
      Operand::Bare(x) => *x,
    }
  }

  /// The unit label of this operand, or `None` for a bare number.
  pub fn units(&self) -> Option<&str> {
    match self {
      Operand::Quantity(q) => Some(q.units()),
      Operand::Bare(_) => None,
    }
  }

  /// The unit label of this operand, treating a bare number as
  /// unitless.
  pub fn units_or_empty(&self) -> &str {
    self.units().unwrap_or("")
  }
}

/// A quantity renders as itself. A bare number renders as its value.
impl<'a> Display for Operand<'a> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Operand::Quantity(q) => write!(f, "{q}"),
      Operand::Bare(x) => write!(f, "{x}"),
    }
  }
}

impl<'a> IntoOperand<'a> for Operand<'a> {
  fn into_operand(self) -> Result<Operand<'a>, UnitError> {
    Ok(self)
  }
}

impl<'a> IntoOperand<'a> for Quantity {
  fn into_operand(self) -> Result<Operand<'a>, UnitError> {
    Ok(Operand::Quantity(Cow::Owned(self)))
  }
}

impl<'a> IntoOperand<'a> for &'a Quantity {
  fn into_operand(self) -> Result<Operand<'a>, UnitError> {
    Ok(Operand::Quantity(Cow::Borrowed(self)))
  }
}

impl<'a> IntoOperand<'a> for &str {
  fn into_operand(self) -> Result<Operand<'a>, UnitError> {
    let quantity: Quantity = self.parse()?;
    Ok(Operand::Quantity(Cow::Owned(quantity)))
  }
}

impl<'a> IntoOperand<'a> for String {
  fn into_operand(self) -> Result<Operand<'a>, UnitError> {
    self.as_str().into_operand()
  }
}

macro_rules! bare_number_operand {
  ($($t:ty),*) => {
    $(
      impl<'a> IntoOperand<'a> for $t {
        fn into_operand(self) -> Result<Operand<'a>, UnitError> {
          Ok(Operand::Bare(f64::from(self)))
        }
      }
    )*
  }
}

bare_number_operand!(f64, f32, i32, u32, i16, u16, i8, u8);

impl<'a> IntoOperand<'a> for i64 {
  fn into_operand(self) -> Result<Operand<'a>, UnitError> {
    // Lossy above 2^53, as any conversion of a large integer to a
    // float would be.
    Ok(Operand::Bare(self as f64))
  }
}

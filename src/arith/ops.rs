
//! Standard operator impls for [`Quantity`].
//!
//! Every binary operator returns a `Result`, and evaluates under
//! [`PropagationMode::current`], so the process-wide checking policy
//! in effect at the moment of the operation applies. Use the named
//! methods on [`PropagationMode`] to choose a policy explicitly.

use crate::error::UnitError;
use crate::mode::PropagationMode;
use crate::quantity::{Quantity, IntoOperand};

use std::ops::{Add, Sub, Mul, Div};

macro_rules! forward_binary_op {
  ($trait_name:ident, $method:ident) => {
    impl<'a, R: IntoOperand<'a>> $trait_name<R> for &Quantity {
      type Output = Result<Quantity, UnitError>;

      fn $method(self, rhs: R) -> Result<Quantity, UnitError> {
        PropagationMode::current().$method(self, rhs)
      }
    }

    impl<'a, R: IntoOperand<'a>> $trait_name<R> for Quantity {
      type Output = Result<Quantity, UnitError>;

      fn $method(self, rhs: R) -> Result<Quantity, UnitError> {
        PropagationMode::current().$method(&self, rhs)
      }
    }
  }
}

forward_binary_op!(Add, add);
forward_binary_op!(Sub, sub);
forward_binary_op!(Mul, mul);
forward_binary_op!(Div, div);

// Operators with a quantity on the right and a raw value on the left.
// These delegate to the reflected methods, so the quantity is still
// the one whose metadata survives.
macro_rules! reflected_binary_op {
  ($lhs:ty, $trait_name:ident, $method:ident, $reflected:ident) => {
    impl $trait_name<&Quantity> for $lhs {
      type Output = Result<Quantity, UnitError>;

      fn $method(self, rhs: &Quantity) -> Result<Quantity, UnitError> {
        PropagationMode::current().$reflected(rhs, self)
      }
    }

    impl $trait_name<Quantity> for $lhs {
      type Output = Result<Quantity, UnitError>;

      fn $method(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        PropagationMode::current().$reflected(&rhs, self)
      }
    }
  }
}

macro_rules! reflected_binary_ops {
  ($($lhs:ty),*) => {
    $(
      reflected_binary_op!($lhs, Add, add, radd);
      reflected_binary_op!($lhs, Sub, sub, rsub);
      reflected_binary_op!($lhs, Mul, mul, rmul);
      reflected_binary_op!($lhs, Div, div, rdiv);
    )*
  }
}

reflected_binary_ops!(f64, i32, i64, &str);

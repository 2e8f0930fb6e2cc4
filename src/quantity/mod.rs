
//! The unit-tagged quantity type and the coercion of raw operands
//! into quantities.

mod base;
mod operand;

pub use base::Quantity;
pub use operand::{Operand, IntoOperand};

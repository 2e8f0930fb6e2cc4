
//! Unit propagation for arithmetic on unit-tagged quantities.
//!
//! A [`Quantity`] is a real number with an opaque unit label. Adding,
//! multiplying, dividing, or comparing quantities derives the label of
//! the result from a small table of unit algebra (`V * A = W`) and,
//! failing that, from generic textual rules (`m / s = m/s`). A
//! [`CheckingPolicy`] decides how strictly mismatched labels are
//! rejected.

pub mod arith;
pub mod error;
pub mod mode;
pub mod quantity;
pub mod units;
pub mod util;

pub use error::UnitError;
pub use mode::PropagationMode;
pub use quantity::{Quantity, Operand, IntoOperand};
pub use units::CheckingPolicy;

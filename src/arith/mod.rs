
//! Unit-propagating arithmetic on [`Quantity`] values.
//!
//! Binary operations are named methods on
//! [`PropagationMode`](crate::mode::PropagationMode), which carries
//! the checking policy and simplification table they run under. The
//! standard operator traits are implemented on top of these, using the
//! process-wide policy.
//!
//! [`Quantity`]: crate::quantity::Quantity

mod additive;
mod compare;
mod multiplicative;
mod ops;
mod unary;

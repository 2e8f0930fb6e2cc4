
//! Various utility functions.

pub mod brackets;
pub mod stricteq;

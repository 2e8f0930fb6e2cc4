
//! Subsystem for deriving the unit label of the result of an
//! arithmetic operation from the unit labels of its operands.

pub mod normalize;
pub mod policy;
pub mod table;

pub use normalize::{Category, ParseCategoryError, group, group_aggressive, normalize,
                    PRODUCT_SEP, QUOTIENT_SEP, RECIPROCAL};
pub use policy::{CheckingPolicy, ParsePolicyError};
pub use table::{SimplificationTable, SimplificationRule, Simplification, Lookup, TableError};


//! Canonicalization of unit-label pairs, so that lookups into the
//! simplification table do not depend on operand order or on how a
//! compound label was parenthesized.

use crate::util::brackets::ConstBrackets;

use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// The character joining two labels in a product, such as `"m-s"`.
pub const PRODUCT_SEP: &str = "-";

/// The character joining two labels in a quotient, such as `"m/s"`.
pub const QUOTIENT_SEP: &str = "/";

/// Suffix marking the reciprocal of a unit, as in `"s⁻¹"`.
pub const RECIPROCAL: &str = "⁻¹";

/// The family of operations a pair of unit labels is being combined
/// under. Each category has its own section of the simplification
/// table and its own normalization rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
  /// Addition and subtraction. Unordered.
  Additive,
  /// Multiplication. Unordered.
  Multiply,
  /// Division. Ordered as (numerator, denominator).
  Divide,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown operation category '{input}'")]
pub struct ParseCategoryError {
  pub input: String,
}

impl Category {
  pub const ALL: [Category; 3] = [Category::Additive, Category::Multiply, Category::Divide];

  pub fn name(self) -> &'static str {
    match self {
      Category::Additive => "additive",
      Category::Multiply => "multiply",
      Category::Divide => "divide",
    }
  }

  /// Whether the order of the two labels is irrelevant in this
  /// category.
  pub fn is_commutative(self) -> bool {
    !matches!(self, Category::Divide)
  }
}

impl Display for Category {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Category {
  type Err = ParseCategoryError;

  fn from_str(s: &str) -> Result<Self, ParseCategoryError> {
    Category::ALL.into_iter()
      .find(|category| category.name() == s)
      .ok_or_else(|| ParseCategoryError { input: s.to_owned() })
  }
}

/// Parenthesizes a unit label if it contains a quotient, so that it
/// can be safely juxtaposed with another label. If `aggressive` is
/// true, a label containing a product is parenthesized as well.
///
/// Grouping is idempotent: a label which is already a single
/// parenthesized group is returned unchanged.
pub fn group(units: &str, aggressive: bool) -> String {
  let needs_group = units.contains(QUOTIENT_SEP) || (aggressive && units.contains(PRODUCT_SEP));
  if needs_group {
    ConstBrackets::parens().wrap_once(units)
  } else {
    units.to_owned()
  }
}

/// Groups a label which is about to appear as a denominator.
pub fn group_aggressive(units: &str) -> String {
  group(units, true)
}

/// Produces the canonical form of a pair of unit labels for the given
/// category.
///
/// For commutative categories, the raw labels are sorted before
/// grouping, so `normalize(a, b, c) == normalize(b, a, c)`. For
/// division, the order is kept and the denominator is grouped
/// aggressively, since it will be concatenated after a quotient
/// separator.
pub fn normalize(left: &str, right: &str, category: Category) -> (String, String) {
  if category.is_commutative() {
    let (low, high) = if left <= right { (left, right) } else { (right, left) };
    (group(low, false), group(high, false))
  } else {
    (group(left, false), group_aggressive(right))
  }
}

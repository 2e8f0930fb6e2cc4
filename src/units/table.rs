
use super::normalize::{Category, normalize};

use once_cell::sync::Lazy;
use thiserror::Error;

use std::collections::HashMap;

/// Ohm sign, U+2126.
const OHM_SIGN: &str = "\u{2126}";
/// Greek capital omega, U+03A9. Visually identical to the ohm sign,
/// and far more common in typed input.
const OMEGA: &str = "\u{03A9}";
/// Inverted ohm, the mho, used for conductance.
const MHO: &str = "Ʊ";

/// The result recorded in the table for a pair of unit labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Simplification {
  /// The pair combines into the given label.
  Unit(String),
  /// The pair may never be combined under this category, even if the
  /// labels are identical.
  Forbidden,
}

/// One literal fact about unit algebra, before normalization.
#[derive(Debug, Clone)]
pub struct SimplificationRule {
  pub category: Category,
  pub left: String,
  pub right: String,
  pub result: Simplification,
}

/// The outcome of probing the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
  Unit(&'a str),
  Forbidden,
  Miss,
}

/// An immutable mapping from (category, normalized unit pair) to the
/// unit of the result. Keys are always normalized with
/// [`normalize`] at insertion time, and lookups expect the same
/// normalization, so a table never compares raw labels.
#[derive(Debug, Clone, Default)]
pub struct SimplificationTable {
  rules: HashMap<Category, HashMap<(String, String), Simplification>>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
  #[error("Duplicate {category} rule for ({left}, {right})")]
  DuplicateRule { category: Category, left: String, right: String },
}

static BUILTIN_TABLE: Lazy<SimplificationTable> = Lazy::new(|| {
  // Infallible: `test_builtin_rules_contain_no_duplicates` covers
  // every seed.
  SimplificationTable::new(builtin_rules()).unwrap()
});

impl SimplificationRule {
  pub fn new(
    category: Category,
    left: impl Into<String>,
    right: impl Into<String>,
    result: impl Into<String>,
  ) -> Self {
    Self {
      category,
      left: left.into(),
      right: right.into(),
      result: Simplification::Unit(result.into()),
    }
  }

  pub fn forbidden(category: Category, left: impl Into<String>, right: impl Into<String>) -> Self {
    Self {
      category,
      left: left.into(),
      right: right.into(),
      result: Simplification::Forbidden,
    }
  }
}

impl SimplificationTable {
  /// Builds a table from the given rules. Each rule's key is
  /// normalized before insertion. If two rules normalize to the same
  /// key in the same category, this returns an error.
  pub fn new(rules: impl IntoIterator<Item = SimplificationRule>) -> Result<Self, TableError> {
    let mut table = Self::default();
    for rule in rules {
      table.insert(rule)?;
    }
    Ok(table)
  }

  /// The process-wide table built from the physical facts in
  /// [`builtin_rules`]. Constructed on first use.
  pub fn builtin() -> &'static SimplificationTable {
    &BUILTIN_TABLE
  }

  // Private: a table is read-only once it leaves `new`.
  fn insert(&mut self, rule: SimplificationRule) -> Result<(), TableError> {
    let key = normalize(&rule.left, &rule.right, rule.category);
    let section = self.rules.entry(rule.category).or_default();
    if section.contains_key(&key) {
      return Err(TableError::DuplicateRule {
        category: rule.category,
        left: key.0,
        right: key.1,
      });
    }
    section.insert(key, rule.result);
    Ok(())
  }

  /// Looks up an already-normalized pair of labels.
  pub fn lookup(&self, category: Category, left: &str, right: &str) -> Lookup<'_> {
    let Some(section) = self.rules.get(&category) else {
      return Lookup::Miss;
    };
    // The map is keyed on owned strings, so a borrowed probe needs a
    // temporary key.
    match section.get(&(left.to_owned(), right.to_owned())) {
      Some(Simplification::Unit(unit)) => Lookup::Unit(unit),
      Some(Simplification::Forbidden) => Lookup::Forbidden,
      None => Lookup::Miss,
    }
  }

  /// The number of rules, across all categories.
  pub fn len(&self) -> usize {
    self.rules.values().map(HashMap::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// The literal facts of unit algebra known to the builtin table.
pub fn builtin_rules() -> Vec<SimplificationRule> {
  use Category::{Additive, Multiply, Divide};
  let mut rules = vec![
    // Temperature
    SimplificationRule::new(Additive, "°C", "K", "K"),
    SimplificationRule::forbidden(Additive, "K", "K"),

    // Products
    SimplificationRule::new(Multiply, "V", "A", "W"),
    SimplificationRule::new(Multiply, MHO, "V", "A"),
    SimplificationRule::new(Multiply, "rad", "Hz", "rad/s"),
    SimplificationRule::new(Multiply, "rad/s", "s", "rad"),
    SimplificationRule::new(Multiply, "Hz/V", "V", "Hz"),
    SimplificationRule::new(Multiply, "m", "m", "m²"),
    SimplificationRule::new(Multiply, "m²", "m", "m³"),

    // Quotients
    SimplificationRule::new(Divide, "V", "A", OMEGA),
    SimplificationRule::new(Divide, "A", "V", MHO),
    SimplificationRule::new(Divide, "", "s", "Hz"),
    SimplificationRule::new(Divide, "", "Hz", "s"),
    SimplificationRule::new(Divide, "", MHO, OMEGA),
    SimplificationRule::new(Divide, "rad/s", "rad", "Hz"),
    SimplificationRule::new(Divide, "m²", "m", "m"),
    SimplificationRule::new(Divide, "m", "m", ""),
  ];
  // Resistance is written with either the ohm sign or a Greek omega.
  for ohm in [OHM_SIGN, OMEGA] {
    rules.push(SimplificationRule::new(Multiply, ohm, "A", "V"));
    rules.push(SimplificationRule::new(Divide, "V", ohm, "A"));
    rules.push(SimplificationRule::new(Divide, "", ohm, MHO));
  }
  rules
}

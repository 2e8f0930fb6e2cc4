
use crate::error::UnitError;
use crate::util::stricteq::StrictEq;

use once_cell::sync::Lazy;
use regex::Regex;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// A real number tagged with a unit label. The empty label denotes a
/// unitless quantity.
///
/// A quantity may also carry display metadata (a name and a
/// description). Metadata is carried along by arithmetic but never
/// affects it, and it is ignored by `PartialEq`. Use
/// [`StrictEq`] to compare it as well.
#[derive(Debug, Clone)]
pub struct Quantity {
  value: f64,
  units: String,
  name: Option<String>,
  desc: Option<String>,
}

impl Quantity {
  pub fn new(value: f64, units: impl Into<String>) -> Self {
    Self {
      value,
      units: units.into(),
      name: None,
      desc: None,
    }
  }

  pub fn unitless(value: f64) -> Self {
    Self::new(value, "")
  }

  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
    self.desc = Some(desc.into());
    self
  }

  pub fn value(&self) -> f64 {
    self.value
  }

  pub fn units(&self) -> &str {
    &self.units
  }

  pub fn is_unitless(&self) -> bool {
    self.units.is_empty()
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  pub fn desc(&self) -> Option<&str> {
    self.desc.as_deref()
  }

  /// Copies the display metadata of `source` onto `self`, replacing
  /// any metadata `self` already had. The value and unit label are
  /// untouched.
  pub fn inherit_metadata(&mut self, source: &Quantity) {
    self.name = source.name.clone();
    self.desc = source.desc.clone();
  }

  /// As [`Quantity::inherit_metadata`], but by value.
  pub fn inheriting(mut self, source: &Quantity) -> Self {
    self.inherit_metadata(source);
    self
  }

  /// A new quantity with the same unit label and a value computed
  /// from this one. Metadata is not carried over.
  pub(crate) fn map_value(&self, f: impl FnOnce(f64) -> f64) -> Self {
    Self::new(f(self.value), self.units.clone())
  }
}

/// Structural equality: the values and unit labels must both match.
/// This is not the equality of unit-propagating arithmetic, which
/// depends on a checking policy; see
/// [`PropagationMode::eq`](crate::mode::PropagationMode::eq).
impl PartialEq for Quantity {
  fn eq(&self, other: &Self) -> bool {
    self.value == other.value && self.units == other.units
  }
}

impl StrictEq for Quantity {
  fn strict_eq(&self, other: &Self) -> bool {
    self == other && self.name == other.name && self.desc == other.desc
  }
}

impl Display for Quantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.units.is_empty() {
      write!(f, "{}", self.value)
    } else {
      write!(f, "{} {}", self.value, self.units)
    }
  }
}

impl FromStr for Quantity {
  type Err = UnitError;

  /// Parses a real number, optionally followed by a unit label. The
  /// label is everything after the number, with surrounding
  /// whitespace removed.
  fn from_str(s: &str) -> Result<Quantity, UnitError> {
    static RE: Lazy<Regex> = Lazy::new(|| {
      Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)(?:\s+|$|[^\d\s.eE+-])").unwrap()
    });
    let caps = RE.captures(s).ok_or_else(|| UnitError::invalid_number(s))?;
    // Group 1 is not optional, so it is present in any match.
    let number = caps.get(1).unwrap();
    let value = f64::from_str(number.as_str()).map_err(|_| UnitError::invalid_number(s))?;
    let units = s[number.end()..].trim();
    Ok(Quantity::new(value, units))
  }
}

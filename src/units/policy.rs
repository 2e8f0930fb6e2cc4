
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// How aggressively mismatched unit labels are rejected when the
/// simplification table has nothing to say about them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CheckingPolicy {
  /// Unit labels are never checked.
  Off = 0,
  /// Two labels are only incompatible if both are non-empty and they
  /// differ. A unitless value combines freely with a unit-tagged one.
  #[default]
  Lenient = 1,
  /// Any difference in labels is incompatible, including an empty
  /// label against a non-empty one.
  Strict = 2,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown unit checking policy '{input}'")]
pub struct ParsePolicyError {
  pub input: String,
}

static GLOBAL_POLICY: AtomicU8 = AtomicU8::new(CheckingPolicy::Lenient as u8);

impl CheckingPolicy {
  pub fn name(self) -> &'static str {
    match self {
      CheckingPolicy::Off => "off",
      CheckingPolicy::Lenient => "lenient",
      CheckingPolicy::Strict => "strict",
    }
  }

  fn from_repr(repr: u8) -> Self {
    match repr {
      0 => CheckingPolicy::Off,
      2 => CheckingPolicy::Strict,
      _ => CheckingPolicy::Lenient,
    }
  }

  /// The process-wide default policy, as of the moment of the call.
  pub fn global() -> Self {
    Self::from_repr(GLOBAL_POLICY.load(Ordering::Relaxed))
  }

  /// Replaces the process-wide default policy. Affects every
  /// subsequent operation that snapshots the global policy, in every
  /// thread, until it is changed again.
  pub fn set_global(policy: CheckingPolicy) {
    GLOBAL_POLICY.store(policy as u8, Ordering::Relaxed);
  }

  /// Whether the labels of two operands of an addition or
  /// subtraction should be rejected. Only consulted when the
  /// simplification table has no entry for the pair.
  pub fn rejects_additive(self, left: &str, right: &str) -> bool {
    if left == right {
      return false;
    }
    match self {
      CheckingPolicy::Off => false,
      CheckingPolicy::Lenient => !left.is_empty() && !right.is_empty(),
      CheckingPolicy::Strict => true,
    }
  }

  /// Whether the labels of two operands of an ordering comparison
  /// should be rejected. `right` is `None` when the right operand is
  /// a bare number which carries no label at all.
  ///
  /// Unlike [`CheckingPolicy::rejects_additive`], a lenient policy
  /// rejects an empty label against a non-empty one here. Only a bare
  /// number is exempt, and only when the policy is not strict.
  pub fn rejects_comparison(self, left: &str, right: Option<&str>) -> bool {
    match (self, right) {
      (CheckingPolicy::Off, _) => false,
      (CheckingPolicy::Lenient, None) => false,
      (CheckingPolicy::Strict, None) => true,
      (_, Some(right)) => left != right,
    }
  }
}

impl Display for CheckingPolicy {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for CheckingPolicy {
  type Err = ParsePolicyError;

  /// Accepts the policy names, as well as the usual spellings of a
  /// Boolean flag: a false flag turns checking off, and a true flag
  /// selects the default lenient checking.
  fn from_str(s: &str) -> Result<Self, ParsePolicyError> {
    match s.trim().to_lowercase().as_str() {
      "off" | "no" | "n" | "false" | "f" | "0" => Ok(CheckingPolicy::Off),
      "lenient" | "on" | "yes" | "y" | "true" | "t" | "1" => Ok(CheckingPolicy::Lenient),
      "strict" => Ok(CheckingPolicy::Strict),
      _ => Err(ParsePolicyError { input: s.to_owned() }),
    }
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;

  use std::sync::Mutex;

  /// Tests which modify the global policy must hold this lock, since
  /// the test harness runs tests in parallel.
  pub(crate) static GLOBAL_POLICY_LOCK: Mutex<()> = Mutex::new(());

  #[test]
  fn test_default_is_lenient() {
    assert_eq!(CheckingPolicy::default(), CheckingPolicy::Lenient);
  }

  #[test]
  fn test_parse_policy_names() {
    assert_eq!("off".parse::<CheckingPolicy>(), Ok(CheckingPolicy::Off));
    assert_eq!("lenient".parse::<CheckingPolicy>(), Ok(CheckingPolicy::Lenient));
    assert_eq!("strict".parse::<CheckingPolicy>(), Ok(CheckingPolicy::Strict));
    assert_eq!(" Strict ".parse::<CheckingPolicy>(), Ok(CheckingPolicy::Strict));
  }

  #[test]
  fn test_parse_policy_from_flags() {
    for flag in ["no", "n", "false", "F", "0"] {
      assert_eq!(flag.parse::<CheckingPolicy>(), Ok(CheckingPolicy::Off), "flag {flag:?}");
    }
    for flag in ["yes", "Y", "true", "t", "1", "on"] {
      assert_eq!(flag.parse::<CheckingPolicy>(), Ok(CheckingPolicy::Lenient), "flag {flag:?}");
    }
  }

  #[test]
  fn test_parse_policy_failure() {
    let err = "sometimes".parse::<CheckingPolicy>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown unit checking policy 'sometimes'");
  }

  #[test]
  fn test_policy_serde() {
    assert_eq!(serde_json::to_string(&CheckingPolicy::Strict).unwrap(), r#""strict""#);
    let policy: CheckingPolicy = serde_json::from_str(r#""off""#).unwrap();
    assert_eq!(policy, CheckingPolicy::Off);
  }

  #[test]
  fn test_rejects_additive() {
    assert!(!CheckingPolicy::Off.rejects_additive("V", "A"));
    assert!(!CheckingPolicy::Off.rejects_additive("V", ""));

    assert!(CheckingPolicy::Lenient.rejects_additive("V", "A"));
    assert!(!CheckingPolicy::Lenient.rejects_additive("V", ""));
    assert!(!CheckingPolicy::Lenient.rejects_additive("", "A"));

    assert!(CheckingPolicy::Strict.rejects_additive("V", "A"));
    assert!(CheckingPolicy::Strict.rejects_additive("V", ""));

    for policy in [CheckingPolicy::Off, CheckingPolicy::Lenient, CheckingPolicy::Strict] {
      assert!(!policy.rejects_additive("V", "V"));
      assert!(!policy.rejects_additive("", ""));
    }
  }

  #[test]
  fn test_rejects_comparison() {
    assert!(!CheckingPolicy::Off.rejects_comparison("V", Some("A")));
    assert!(!CheckingPolicy::Off.rejects_comparison("V", None));

    assert!(CheckingPolicy::Lenient.rejects_comparison("V", Some("A")));
    assert!(CheckingPolicy::Lenient.rejects_comparison("V", Some("")));
    assert!(!CheckingPolicy::Lenient.rejects_comparison("V", None));
    assert!(!CheckingPolicy::Lenient.rejects_comparison("V", Some("V")));

    assert!(CheckingPolicy::Strict.rejects_comparison("V", None));
    assert!(CheckingPolicy::Strict.rejects_comparison("", None));
    assert!(!CheckingPolicy::Strict.rejects_comparison("V", Some("V")));
  }

  #[test]
  fn test_global_policy() {
    let _guard = GLOBAL_POLICY_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let previous = CheckingPolicy::global();
    CheckingPolicy::set_global(CheckingPolicy::Strict);
    assert_eq!(CheckingPolicy::global(), CheckingPolicy::Strict);
    CheckingPolicy::set_global(CheckingPolicy::Off);
    assert_eq!(CheckingPolicy::global(), CheckingPolicy::Off);
    CheckingPolicy::set_global(previous);
  }
}

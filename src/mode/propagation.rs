
use crate::units::{CheckingPolicy, SimplificationTable};

/// The configuration under which unit-propagating arithmetic is
/// evaluated: the checking policy and the simplification table.
///
/// Every named arithmetic operation takes a `PropagationMode`
/// explicitly, so two computations with different strictness never
/// interfere with one another. The operator impls on
/// [`Quantity`](crate::quantity::Quantity) use
/// [`PropagationMode::current`].
///
/// This structure is designed to be cheap to copy.
#[derive(Clone, Copy, Debug)]
pub struct PropagationMode {
  policy: CheckingPolicy,
  table: &'static SimplificationTable,
}

impl PropagationMode {
  /// Lenient checking with the builtin simplification table.
  pub fn new() -> Self {
    Self {
      policy: CheckingPolicy::default(),
      table: SimplificationTable::builtin(),
    }
  }

  /// A mode using the process-wide policy, as set by
  /// [`CheckingPolicy::set_global`], at the moment of the call. Later
  /// changes to the global policy do not affect the returned mode.
  pub fn current() -> Self {
    Self::new().with_policy(CheckingPolicy::global())
  }

  pub fn with_policy(mut self, policy: CheckingPolicy) -> Self {
    self.policy = policy;
    self
  }

  pub fn with_table(mut self, table: &'static SimplificationTable) -> Self {
    self.table = table;
    self
  }

  pub fn policy(&self) -> CheckingPolicy {
    self.policy
  }

  pub fn table(&self) -> &'static SimplificationTable {
    self.table
  }

  /// Sets the checking policy. See [`CheckingPolicy`].
  pub fn set_policy(&mut self, policy: CheckingPolicy) {
    self.policy = policy;
  }
}

impl Default for PropagationMode {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::policy::tests::GLOBAL_POLICY_LOCK;

  use std::ptr;

  #[test]
  fn test_default_mode() {
    let mode = PropagationMode::default();
    assert_eq!(mode.policy(), CheckingPolicy::Lenient);
    assert!(ptr::eq(mode.table(), SimplificationTable::builtin()));
  }

  #[test]
  fn test_with_policy() {
    let mut mode = PropagationMode::new().with_policy(CheckingPolicy::Strict);
    assert_eq!(mode.policy(), CheckingPolicy::Strict);
    mode.set_policy(CheckingPolicy::Off);
    assert_eq!(mode.policy(), CheckingPolicy::Off);
  }

  #[test]
  fn test_current_mode_snapshots_global_policy() {
    let _guard = GLOBAL_POLICY_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let previous = CheckingPolicy::global();
    CheckingPolicy::set_global(CheckingPolicy::Strict);
    let mode = PropagationMode::current();
    CheckingPolicy::set_global(CheckingPolicy::Off);
    assert_eq!(mode.policy(), CheckingPolicy::Strict);
    assert_eq!(PropagationMode::current().policy(), CheckingPolicy::Off);
    CheckingPolicy::set_global(previous);
  }
}

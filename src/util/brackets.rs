
//! Helpers for wrapping text in brackets.

/// A pair of constant bracket strings which can wrap text or detect
/// text that is already wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstBrackets<'a> {
  start_bracket: &'a str,
  end_bracket: &'a str,
}

impl<'a> ConstBrackets<'a> {
  pub const fn new(start_bracket: &'a str, end_bracket: &'a str) -> Self {
    Self { start_bracket, end_bracket }
  }

  /// Wraps `text` in these brackets unconditionally.
  pub fn wrap(&self, text: &str) -> String {
    format!("{}{}{}", self.start_bracket, text, self.end_bracket)
  }

  /// Returns true if the whole of `text` is a single bracketed group.
  /// That is, `text` begins with the start bracket, and the end
  /// bracket which balances that first start bracket is the final
  /// token in the string.
  ///
  /// `"(a/b)"` is enclosed, but `"(a)/(b)"` is not, even though it
  /// begins and ends with a bracket.
  pub fn encloses(&self, text: &str) -> bool {
    if !text.starts_with(self.start_bracket) || !text.ends_with(self.end_bracket) {
      return false;
    }
    if text.len() < self.start_bracket.len() + self.end_bracket.len() {
      return false;
    }
    let mut depth = 0usize;
    let mut rest = text;
    while !rest.is_empty() {
      if let Some(tail) = rest.strip_prefix(self.start_bracket) {
        depth += 1;
        rest = tail;
      } else if let Some(tail) = rest.strip_prefix(self.end_bracket) {
        depth = match depth.checked_sub(1) {
          Some(depth) => depth,
          None => return false,
        };
        rest = tail;
        if depth == 0 {
          return rest.is_empty();
        }
      } else {
        let mut chars = rest.chars();
        chars.next();
        rest = chars.as_str();
      }
    }
    false
  }

  /// Wraps `text` in these brackets, unless it is already enclosed
  /// by them.
  pub fn wrap_once(&self, text: &str) -> String {
    if self.encloses(text) {
      text.to_owned()
    } else {
      self.wrap(text)
    }
  }
}

impl ConstBrackets<'static> {
  pub const fn parens() -> Self {
    Self::new("(", ")")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_wrap() {
    assert_eq!(ConstBrackets::parens().wrap("a/b"), "(a/b)");
    assert_eq!(ConstBrackets::new("[", "]").wrap("x"), "[x]");
  }

  #[test]
  fn test_encloses() {
    let parens = ConstBrackets::parens();
    assert!(parens.encloses("(a/b)"));
    assert!(parens.encloses("((a)/(b))"));
    assert!(parens.encloses("()"));
    assert!(!parens.encloses("(a)/(b)"));
    assert!(!parens.encloses("a/b"));
    assert!(!parens.encloses("(a/b"));
    assert!(!parens.encloses("a/b)"));
    assert!(!parens.encloses("("));
    assert!(!parens.encloses(""));
  }

  #[test]
  fn test_encloses_with_unicode_contents() {
    let parens = ConstBrackets::parens();
    assert!(parens.encloses("(Ω/m²)"));
    assert!(!parens.encloses("(Ω)-(m²)"));
  }

  #[test]
  fn test_wrap_once() {
    let parens = ConstBrackets::parens();
    assert_eq!(parens.wrap_once("a/b"), "(a/b)");
    assert_eq!(parens.wrap_once("(a/b)"), "(a/b)");
    assert_eq!(parens.wrap_once("(a)/(b)"), "((a)/(b))");
  }
}

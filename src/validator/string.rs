//! String validators
//!
//! Lengths are counted in Unicode scalar values (`char`s), not bytes and not
//! grapheme clusters, so `"€"` has length 1 even though it is three bytes of
//! UTF-8.

use regex::Regex;

use crate::error::{Constraint, ValidationError};

use super::adapters::{OptionalText, Text};
use super::combinators::Validator;

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Text must match a compiled regular expression.
///
/// The match is unanchored; anchor the pattern with `^...$` to match the
/// whole string.
#[derive(Clone, Debug)]
pub struct Pattern(pub Regex);

impl Validator<str> for Pattern {
    #[inline]
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if self.0.is_match(value) {
            Ok(())
        } else {
            Err(Constraint::Pattern(self.0.as_str().to_string()).into())
        }
    }
}

/// Create a validator that passes when the text matches `pattern`.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use valval::prelude::*;
///
/// let digits = matches(Regex::new(r"^\d+$").unwrap());
/// assert!(digits.validate(&Value::from("123")).is_ok());
/// assert_eq!(
///     digits.validate(&Value::from("12a")).unwrap_err().to_string(),
///     r"must match the pattern ^\d+$"
/// );
/// ```
pub fn matches(pattern: Regex) -> Text<Pattern> {
    Text(Pattern(pattern))
}

/// Compile `source` and create a validator that passes when the text matches it.
///
/// # Errors
///
/// Returns the compile error if `source` is not a valid regular expression.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let hex = matches_pattern("^[0-9a-f]+$")?;
/// assert!(hex.validate(&Value::from("beef")).is_ok());
/// assert!(matches_pattern("(").is_err());
/// # Ok::<(), regex::Error>(())
/// ```
pub fn matches_pattern(source: &str) -> Result<Text<Pattern>, regex::Error> {
    Ok(matches(Regex::new(source)?))
}

/// Text must have at least this many characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinLength(pub usize);

impl Validator<str> for MinLength {
    #[inline]
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if char_len(value) >= self.0 {
            Ok(())
        } else {
            Err(Constraint::MinLength(self.0).into())
        }
    }
}

/// Create a validator that passes when the text has at least `min` characters.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// assert!(min_length(3).validate(&Value::from("abc")).is_ok());
/// assert!(min_length(3).validate(&Value::from("ab")).is_err());
/// // Characters, not bytes
/// assert!(min_length(2).validate(&Value::from("€")).is_err());
/// ```
pub fn min_length(min: usize) -> Text<MinLength> {
    Text(MinLength(min))
}

/// Text must have at most this many characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxLength(pub usize);

impl Validator<str> for MaxLength {
    #[inline]
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if char_len(value) <= self.0 {
            Ok(())
        } else {
            Err(Constraint::MaxLength(self.0).into())
        }
    }
}

/// Create a validator that passes when the text has at most `max` characters.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// assert!(max_length(5).validate(&Value::from("hello")).is_ok());
/// assert!(max_length(5).validate(&Value::from("toolong")).is_err());
/// assert!(max_length(1).validate(&Value::from("日")).is_ok());
/// ```
pub fn max_length(max: usize) -> Text<MaxLength> {
    Text(MaxLength(max))
}

/// Nullable text must have at least this many characters; absent counts as 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullableMinLength(pub usize);

impl Validator<Option<String>> for NullableMinLength {
    #[inline]
    fn validate(&self, value: &Option<String>) -> Result<(), ValidationError> {
        MinLength(self.0).validate(value.as_deref().unwrap_or_default())
    }
}

/// Create a validator over nullable text that passes when it has at least
/// `min` characters. An absent value has length 0.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let v = nullable_min_length(1);
/// assert!(v.validate(&Value::from(Some("a"))).is_ok());
/// assert!(v.validate(&Value::from(Some(""))).is_err());
/// assert!(v.validate(&Value::Null).is_err());
/// assert!(nullable_min_length(0).validate(&Value::Null).is_ok());
/// ```
pub fn nullable_min_length(min: usize) -> OptionalText<NullableMinLength> {
    OptionalText(NullableMinLength(min))
}

/// Nullable text must have at most this many characters; absent counts as 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullableMaxLength(pub usize);

impl Validator<Option<String>> for NullableMaxLength {
    #[inline]
    fn validate(&self, value: &Option<String>) -> Result<(), ValidationError> {
        MaxLength(self.0).validate(value.as_deref().unwrap_or_default())
    }
}

/// Create a validator over nullable text that passes when it has at most
/// `max` characters. An absent value has length 0, so it always passes.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let v = nullable_max_length(3);
/// assert!(v.validate(&Value::Null).is_ok());
/// assert!(v.validate(&Value::from(Some("abc"))).is_ok());
/// assert_eq!(
///     v.validate(&Value::from(Some("abcd"))).unwrap_err().to_string(),
///     "length must be 3 or less"
/// );
/// ```
pub fn nullable_max_length(max: usize) -> OptionalText<NullableMaxLength> {
    OptionalText(NullableMaxLength(max))
}

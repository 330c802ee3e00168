//! Typed-value adapters
//!
//! Adapters turn a check on one narrow type (a number, some text, a
//! collection) into a `Validator<Value>`. The candidate's tag is inspected
//! first; a wrong-shaped candidate fails with a type mismatch and the typed
//! check never runs.

use crate::error::ValidationError;
use crate::value::{Record, Value, ValueKind};

use super::combinators::Validator;

/// Adapter for numeric checks. Accepts [`Value::Int`] and [`Value::Float`].
#[derive(Clone, Copy, Debug)]
pub struct Number<V>(pub V);

impl<V: Validator<f64>> Validator<Value> for Number<V> {
    #[inline]
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let n = value
            .as_f64()
            .ok_or_else(|| ValidationError::type_mismatch(ValueKind::Number, value.kind()))?;
        self.0.validate(&n)
    }
}

/// Lift a check on `f64` to a validator over [`Value`].
///
/// Integers are widened to `f64`; anything else fails with "not a number".
/// Integers up to 2^53 in magnitude compare exactly. Larger ones are rounded
/// to the nearest float first, so `Int(2^53 + 1)` is checked as `2^53`.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let even = number(|n: &f64| {
///     if n % 2.0 == 0.0 {
///         Ok(())
///     } else {
///         Err(ValidationError::custom("must be even"))
///     }
/// });
///
/// assert!(even.validate(&Value::from(4)).is_ok());
/// assert!(even.validate(&Value::from(3.0)).is_err());
/// assert_eq!(
///     even.validate(&Value::from("4")).unwrap_err().to_string(),
///     "not a number (got a string)"
/// );
/// ```
pub fn number<V: Validator<f64>>(check: V) -> Number<V> {
    Number(check)
}

/// Adapter for text checks. Accepts [`Value::Text`].
#[derive(Clone, Copy, Debug)]
pub struct Text<V>(pub V);

impl<V: Validator<str>> Validator<Value> for Text<V> {
    #[inline]
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let s = value
            .as_str()
            .ok_or_else(|| ValidationError::type_mismatch(ValueKind::String, value.kind()))?;
        self.0.validate(s)
    }
}

/// Lift a check on `str` to a validator over [`Value`].
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let lowercase = text(|s: &str| {
///     if s.chars().all(char::is_lowercase) {
///         Ok(())
///     } else {
///         Err(ValidationError::custom("must be lowercase"))
///     }
/// });
///
/// assert!(lowercase.validate(&Value::from("abc")).is_ok());
/// assert!(lowercase.validate(&Value::from(1)).unwrap_err().is_type_mismatch());
/// ```
pub fn text<V: Validator<str>>(check: V) -> Text<V> {
    Text(check)
}

/// Adapter for nullable-text checks.
///
/// Accepts [`Value::NullableText`], and the absent marker [`Value::Null`]
/// which reaches the check as `None`.
#[derive(Clone, Copy, Debug)]
pub struct OptionalText<V>(pub V);

impl<V: Validator<Option<String>>> Validator<Value> for OptionalText<V> {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::NullableText(s) => self.0.validate(s),
            Value::Null => self.0.validate(&None),
            other => Err(ValidationError::type_mismatch(
                ValueKind::NullableString,
                other.kind(),
            )),
        }
    }
}

/// Lift a check on `Option<String>` to a validator over [`Value`].
///
/// Absence is not a type failure: the check decides whether `None` is
/// acceptable.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let present = optional_text(|s: &Option<String>| match s {
///     Some(_) => Ok(()),
///     None => Err(ValidationError::custom("value is absent")),
/// });
///
/// assert!(present.validate(&Value::from(Some("x"))).is_ok());
/// assert!(present.validate(&Value::Null).is_err());
/// assert!(present.validate(&Value::NullableText(None)).is_err());
/// ```
pub fn optional_text<V: Validator<Option<String>>>(check: V) -> OptionalText<V> {
    OptionalText(check)
}

/// Adapter for sequence checks. Accepts [`Value::Sequence`].
#[derive(Clone, Copy, Debug)]
pub struct SequenceOf<V>(pub V);

impl<V: Validator<[Value]>> Validator<Value> for SequenceOf<V> {
    #[inline]
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let items = value
            .as_slice()
            .ok_or_else(|| ValidationError::type_mismatch(ValueKind::Array, value.kind()))?;
        self.0.validate(items)
    }
}

/// Lift a sequence validator to a validator over [`Value`].
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let pair = sequence_of(min_items(2).and(max_items(2)));
/// assert!(pair.validate(&Value::from(vec![1, 2])).is_ok());
/// assert!(pair.validate(&Value::from(vec![1])).is_err());
/// assert!(pair.validate(&Value::from("12")).unwrap_err().is_type_mismatch());
/// ```
pub fn sequence_of<V: Validator<[Value]>>(check: V) -> SequenceOf<V> {
    SequenceOf(check)
}

/// Adapter for record checks. Accepts [`Value::Record`].
#[derive(Clone, Debug)]
pub struct RecordOf<V>(pub V);

impl<V: Validator<Record>> Validator<Value> for RecordOf<V> {
    #[inline]
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let map = value
            .as_record()
            .ok_or_else(|| ValidationError::type_mismatch(ValueKind::Object, value.kind()))?;
        self.0.validate(map)
    }
}

/// Lift a record validator to a validator over [`Value`].
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
/// use valval::record;
///
/// let user = record_of(required_fields(["name"]));
/// assert!(user.validate(&record! { "name" => "alice" }).is_ok());
/// assert!(user.validate(&Value::from(vec!["alice"])).unwrap_err().is_type_mismatch());
/// ```
pub fn record_of<V: Validator<Record>>(check: V) -> RecordOf<V> {
    RecordOf(check)
}

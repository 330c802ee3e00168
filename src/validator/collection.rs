//! Collection validators
//!
//! Element-count bounds for sequences and required-field presence for
//! records. These work on the collection shapes directly; wrap them with
//! [`sequence_of`](super::sequence_of) or [`record_of`](super::record_of) to
//! use them on a [`Value`](crate::Value).

use crate::error::{Constraint, ValidationError};
use crate::value::{Record, Value};

use super::combinators::Validator;

/// Sequence must have at least this many elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinItems(pub usize);

impl Validator<[Value]> for MinItems {
    #[inline]
    fn validate(&self, value: &[Value]) -> Result<(), ValidationError> {
        if value.len() >= self.0 {
            Ok(())
        } else {
            Err(Constraint::MinItems(self.0).into())
        }
    }
}

/// Create a validator that passes when the sequence has at least `min` elements.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let items = vec![Value::from(1), Value::from(2)];
/// assert!(min_items(2).validate(&items[..]).is_ok());
/// assert!(min_items(3).validate(&items[..]).is_err());
/// ```
pub fn min_items(min: usize) -> MinItems {
    MinItems(min)
}

/// Sequence must have at most this many elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxItems(pub usize);

impl Validator<[Value]> for MaxItems {
    #[inline]
    fn validate(&self, value: &[Value]) -> Result<(), ValidationError> {
        if value.len() <= self.0 {
            Ok(())
        } else {
            Err(Constraint::MaxItems(self.0).into())
        }
    }
}

/// Create a validator that passes when the sequence has at most `max` elements.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let items = vec![Value::from(1), Value::from(2)];
/// assert!(max_items(2).validate(&items[..]).is_ok());
/// assert_eq!(
///     max_items(1).validate(&items[..]).unwrap_err().to_string(),
///     "length must be 1 or less"
/// );
/// ```
pub fn max_items(max: usize) -> MaxItems {
    MaxItems(max)
}

/// Record must hold a present value for every listed field.
///
/// A field is missing when the key is not in the record or its value is
/// absent ([`Value::Null`], or a [`Value::NullableText`] holding `None`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiredFields(pub Vec<String>);

impl Validator<Record> for RequiredFields {
    fn validate(&self, value: &Record) -> Result<(), ValidationError> {
        match self
            .0
            .iter()
            .find(|key| value.get(key.as_str()).map_or(true, Value::is_absent))
        {
            Some(missing) => Err(Constraint::Required(missing.clone()).into()),
            None => Ok(()),
        }
    }
}

/// Create a validator that passes when every key in `keys` is present in the
/// record and not absent.
///
/// Keys are checked in the order given and only the first missing one is
/// reported.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
/// use valval::record;
///
/// let v = record_of(required_fields(["a", "b"]));
/// assert!(v.validate(&record! { "a" => 1, "b" => 2 }).is_ok());
/// assert_eq!(
///     v.validate(&record! { "a" => 1 }).unwrap_err().to_string(),
///     "field b is required"
/// );
/// assert!(v.validate(&record! { "a" => 1, "b" => Value::Null }).is_err());
/// ```
pub fn required_fields<I, S>(keys: I) -> RequiredFields
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    RequiredFields(keys.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use crate::validator::ValidatorExt;

    fn items<V: Into<Value>, const N: usize>(values: [V; N]) -> Vec<Value> {
        values.into_iter().map(Into::into).collect()
    }

    fn as_record(v: &Value) -> &Record {
        v.as_record().expect("record")
    }

    #[test]
    fn test_min_items() {
        let v = min_items(2);
        assert!(v.validate(&items([1, 2])[..]).is_ok());
        assert!(v.validate(&items([1, 2, 3])[..]).is_ok());
        assert_eq!(
            v.validate(&items([1])[..]),
            Err(ValidationError::violation(Constraint::MinItems(2)))
        );
        assert!(min_items(0).validate(&[] as &[Value]).is_ok());
    }

    #[test]
    fn test_max_items() {
        let v = max_items(2);
        assert!(v.validate(&[] as &[Value]).is_ok());
        assert!(v.validate(&items(["a", "b"])[..]).is_ok());
        assert_eq!(
            v.validate(&items(["a", "b", "c"])[..]),
            Err(ValidationError::violation(Constraint::MaxItems(2)))
        );
    }

    #[test]
    fn test_item_bounds_compose() {
        let v = min_items(1).and(max_items(3));
        let pair = items([Value::from(1), Value::from("two")]);
        assert!(v.validate(&pair[..]).is_ok());
        assert!(v.validate(&pair[..0]).is_err());
        assert_eq!(
            v.validate(&items([1, 2, 3, 4])[..]),
            Err(ValidationError::violation(Constraint::MaxItems(3)))
        );
    }

    #[test]
    fn test_required_fields_reports_missing_key() {
        let v = required_fields(["a", "b"]);
        let rec = record! { "a" => 1 };
        assert_eq!(
            v.validate(as_record(&rec)),
            Err(ValidationError::violation(Constraint::Required("b".into())))
        );
    }

    #[test]
    fn test_required_fields_all_present() {
        let v = required_fields(["a", "b"]);
        let rec = record! { "a" => 1, "b" => 2, "c" => 3 };
        assert!(v.validate(as_record(&rec)).is_ok());
    }

    #[test]
    fn test_required_fields_null_counts_as_absent() {
        let v = required_fields(["a", "b"]);
        let rec = record! { "a" => 1, "b" => Value::Null };
        let err = v.validate(as_record(&rec)).unwrap_err();
        assert_eq!(err.to_string(), "field b is required");
    }

    #[test]
    fn test_required_fields_absent_nullable_text_counts_as_absent() {
        let v = required_fields(["nick"]);
        let rec = record! { "nick" => Value::NullableText(None) };
        assert!(v.validate(as_record(&rec)).is_err());
    }

    #[test]
    fn test_required_fields_reports_only_first_missing() {
        let v = required_fields(["z", "y", "x"]);
        let rec = record! {};
        assert_eq!(
            v.validate(as_record(&rec)).unwrap_err().to_string(),
            "field z is required"
        );
    }

    #[test]
    fn test_required_fields_present_but_empty_values_pass() {
        // Empty is not absent
        let v = required_fields(["name", "tags", "nick"]);
        let rec = record! {
            "name" => "",
            "tags" => Vec::<Value>::new(),
            "nick" => Some("x"),
        };
        assert!(v.validate(as_record(&rec)).is_ok());
    }

    #[test]
    fn test_no_required_fields() {
        let v = required_fields(Vec::<String>::new());
        assert!(v.validate(&Record::new()).is_ok());
    }
}

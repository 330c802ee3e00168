//! Set membership

use crate::error::{Constraint, ValidationError};
use crate::value::Value;

use super::combinators::Validator;

/// Value must equal one of the allowed values.
///
/// Equality is exact on variant and payload: `1` does not match `"1"` or
/// `1.0`. A `NaN` in the allowed list never matches anything.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberOf(pub Vec<Value>);

impl Validator<Value> for MemberOf {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if self.0.iter().any(|allowed| allowed == value) {
            Ok(())
        } else {
            Err(Constraint::OneOf(self.0.clone()).into())
        }
    }
}

/// Create a validator that passes when the candidate equals one of `allowed`.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let v = member_of([Value::from(1), Value::from("x"), Value::from(true)]);
/// assert!(v.validate(&Value::from(1)).is_ok());
/// assert!(v.validate(&Value::from("x")).is_ok());
/// assert!(v.validate(&Value::from("1")).is_err());
/// assert_eq!(
///     v.validate(&Value::from(2)).unwrap_err().to_string(),
///     r#"invalid value. allowed are [1, "x", true]"#
/// );
///
/// let colour = member_of(["red", "green", "blue"]);
/// assert!(colour.validate(&Value::from("green")).is_ok());
/// ```
pub fn member_of<I, V>(allowed: I) -> MemberOf
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    MemberOf(allowed.into_iter().map(Into::into).collect())
}

//! Numeric bounds
//!
//! Each bound is a typed check on `f64` that can be used on its own, and a
//! constructor that wraps it in the [`Number`] adapter for use on [`Value`]s.
//!
//! Comparisons follow IEEE 754: `NaN` compares false with everything, so a
//! `NaN` candidate fails every bound.
//!
//! [`Value`]: crate::Value

use crate::error::{Constraint, ValidationError};

use super::adapters::Number;
use super::combinators::Validator;

/// Value must be strictly greater than the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreaterThan(pub f64);

impl Validator<f64> for GreaterThan {
    #[inline]
    fn validate(&self, value: &f64) -> Result<(), ValidationError> {
        if *value > self.0 {
            Ok(())
        } else {
            Err(Constraint::GreaterThan(self.0).into())
        }
    }
}

/// Create a validator that passes when the number is greater than `threshold`.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// assert!(greater_than(5.0).validate(&Value::from(6)).is_ok());
/// assert!(greater_than(5.0).validate(&Value::from(5)).is_err());
/// assert!(greater_than(5.0).validate(&Value::from(f64::NAN)).is_err());
/// ```
pub fn greater_than(threshold: f64) -> Number<GreaterThan> {
    Number(GreaterThan(threshold))
}

/// Value must be greater than or equal to the minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtLeast(pub f64);

impl Validator<f64> for AtLeast {
    #[inline]
    fn validate(&self, value: &f64) -> Result<(), ValidationError> {
        if *value >= self.0 {
            Ok(())
        } else {
            Err(Constraint::AtLeast(self.0).into())
        }
    }
}

/// Create a validator that passes when the number is at least `minimum`.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// assert!(at_least(5.0).validate(&Value::from(5)).is_ok());
/// assert_eq!(
///     at_least(5.0).validate(&Value::from(4)).unwrap_err().to_string(),
///     "must be 5 or greater"
/// );
/// ```
pub fn at_least(minimum: f64) -> Number<AtLeast> {
    Number(AtLeast(minimum))
}

/// Value must be strictly less than the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LessThan(pub f64);

impl Validator<f64> for LessThan {
    #[inline]
    fn validate(&self, value: &f64) -> Result<(), ValidationError> {
        if *value < self.0 {
            Ok(())
        } else {
            Err(Constraint::LessThan(self.0).into())
        }
    }
}

/// Create a validator that passes when the number is less than `threshold`.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// assert!(less_than(5.0).validate(&Value::from(4.9)).is_ok());
/// assert!(less_than(5.0).validate(&Value::from(5)).is_err());
/// ```
pub fn less_than(threshold: f64) -> Number<LessThan> {
    Number(LessThan(threshold))
}

/// Value must be less than or equal to the maximum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtMost(pub f64);

impl Validator<f64> for AtMost {
    #[inline]
    fn validate(&self, value: &f64) -> Result<(), ValidationError> {
        if *value <= self.0 {
            Ok(())
        } else {
            Err(Constraint::AtMost(self.0).into())
        }
    }
}

/// Create a validator that passes when the number is at most `maximum`.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// assert!(at_most(5.0).validate(&Value::from(5)).is_ok());
/// assert_eq!(
///     at_most(5.0).validate(&Value::from(6)).unwrap_err().to_string(),
///     "must be 5 or less"
/// );
/// ```
pub fn at_most(maximum: f64) -> Number<AtMost> {
    Number(AtMost(maximum))
}

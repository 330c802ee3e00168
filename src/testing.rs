//! Testing utilities and helpers for valval
//!
//! This module provides ergonomic utilities for testing validators: assertion
//! macros, fixed-outcome validators, an invocation-counting [`Probe`], and
//! property-based testing support for [`Value`](crate::Value).
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use valval::prelude::*;
//! use valval::{assert_invalid, assert_valid, assert_violation};
//!
//! let v = min_length(3);
//! assert_valid!(v, Value::from("abc"));
//! let err = assert_invalid!(v, Value::from(42));
//! assert!(err.is_type_mismatch());
//! assert_violation!(v, Value::from("ab"), Constraint::MinLength(3));
//! ```
//!
//! ## Counting invocations
//!
//! ```rust
//! use valval::prelude::*;
//! use valval::testing::{always_fail, Probe};
//!
//! let second = Probe::new(always_fail("second"));
//! let calls = second.counter();
//!
//! let v = all_of([min_length(5).boxed(), second.boxed()]);
//! assert!(v.validate(&Value::from("abc")).is_err());
//! assert_eq!(calls.get(), 0);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::ValidationError;
use crate::validator::Validator;
#[cfg(feature = "proptest")]
use crate::value::Value;

/// A validator with a fixed outcome, whatever the candidate.
///
/// Created by [`always_ok`] and [`always_fail`].
#[derive(Clone, Debug, PartialEq)]
pub struct Fixed(Option<ValidationError>);

impl<T: ?Sized> Validator<T> for Fixed {
    #[inline]
    fn validate(&self, _value: &T) -> Result<(), ValidationError> {
        match &self.0 {
            None => Ok(()),
            Some(err) => Err(err.clone()),
        }
    }
}

/// A validator that passes every candidate.
pub fn always_ok() -> Fixed {
    Fixed(None)
}

/// A validator that fails every candidate with a custom error.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
/// use valval::testing::always_fail;
///
/// let v = always_fail("nope");
/// assert_eq!(
///     Validator::<Value>::validate(&v, &Value::Null),
///     Err(ValidationError::custom("nope"))
/// );
/// ```
pub fn always_fail(message: impl Into<String>) -> Fixed {
    Fixed(Some(ValidationError::custom(message)))
}

/// Shared handle to a [`Probe`]'s invocation count.
///
/// Stays readable after the probe has been moved into a combinator.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// Number of times the probe has been invoked.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// A validator wrapper that counts how many times it is invoked.
///
/// The outcome is whatever the wrapped validator returns.
#[derive(Clone, Debug)]
pub struct Probe<V> {
    inner: V,
    calls: CallCounter,
}

impl<V> Probe<V> {
    /// Wrap `inner`.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            calls: CallCounter::default(),
        }
    }

    /// A handle to the invocation count.
    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl<T: ?Sized, V: Validator<T>> Validator<T> for Probe<V> {
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        self.calls.0.fetch_add(1, Ordering::SeqCst);
        self.inner.validate(value)
    }
}

/// Assert that a validator accepts a value.
///
/// This macro will panic if the validator returns an error.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
/// use valval::assert_valid;
///
/// assert_valid!(greater_than(0.0), Value::from(1));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr, $value:expr) => {
        match $crate::Validator::validate(&$validator, &$value) {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected valid, got error: {}", e);
            }
        }
    };
}

/// Assert that a validator rejects a value, evaluating to the error.
///
/// This macro will panic if the validator accepts the value.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
/// use valval::assert_invalid;
///
/// let err = assert_invalid!(greater_than(0.0), Value::from(-1));
/// assert_eq!(err.to_string(), "must be greater than 0");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr, $value:expr) => {
        match $crate::Validator::validate(&$validator, &$value) {
            ::std::result::Result::Err(e) => e,
            ::std::result::Result::Ok(()) => {
                panic!("Expected error, got valid: {:?}", $value);
            }
        }
    };
}

/// Assert that a validator rejects a value with a specific constraint.
///
/// This macro will panic if the validator accepts the value, or if it fails
/// with anything other than a violation of `constraint`.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
/// use valval::assert_violation;
///
/// assert_violation!(at_most(10.0), Value::from(11), Constraint::AtMost(10.0));
/// ```
#[macro_export]
macro_rules! assert_violation {
    ($validator:expr, $value:expr, $constraint:expr) => {
        match $crate::Validator::validate(&$validator, &$value) {
            ::std::result::Result::Err(e) => {
                assert_eq!(e, $crate::ValidationError::Violation($constraint));
            }
            ::std::result::Result::Ok(()) => {
                panic!(
                    "Expected violation {:?}, got valid: {:?}",
                    $constraint, $value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy producing arbitrary [`Value`](crate::Value)s, nested up to three
/// levels deep.
#[cfg(feature = "proptest")]
pub fn arb_value() -> BoxedStrategy<Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        ".{0,12}".prop_map(Value::Text),
        proptest::option::of(".{0,12}").prop_map(Value::NullableText),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            proptest::collection::btree_map(".{0,6}", inner, 0..4).prop_map(Value::Record),
        ]
    })
    .boxed()
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        arb_value()
    }
}

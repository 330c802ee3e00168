//! Core validator trait and logical combinators
//!
//! This module provides the foundational `Validator` trait and the
//! combinators used to compose validators into larger rules.

use std::fmt;

use crate::error::ValidationError;

/// A composable check over values of type `T`.
///
/// A validator returns `Ok(())` when the candidate passes and a
/// [`ValidationError`] describing the failure otherwise. Validators never
/// mutate the candidate and hold no hidden state, so the same instance can
/// be shared across threads.
///
/// Closures of the shape `Fn(&T) -> Result<(), ValidationError>` are
/// validators too.
///
/// # Example
///
/// ```rust
/// use valval::{Validator, ValidationError};
///
/// let even = |n: &i64| {
///     if n % 2 == 0 {
///         Ok(())
///     } else {
///         Err(ValidationError::custom("must be even"))
///     }
/// };
/// assert!(even.validate(&4).is_ok());
/// assert!(even.validate(&3).is_err());
/// ```
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Check `value`, returning the failure if it does not pass.
    fn validate(&self, value: &T) -> Result<(), ValidationError>;
}

// Blanket impl for closures
impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> Result<(), ValidationError> + Send + Sync,
{
    #[inline]
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        self(value)
    }
}

/// Extension trait for validator combinators.
///
/// Provides method chaining for the binary combinators and type erasure for
/// the list combinators [`all_of`] and [`any_of`].
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let percent = at_least(0.0).and(at_most(100.0));
/// assert!(percent.validate(&Value::from(42)).is_ok());
/// assert!(percent.validate(&Value::from(101)).is_err());
/// ```
pub trait ValidatorExt<T: ?Sized>: Validator<T> + Sized {
    /// Both validators must pass.
    ///
    /// `other` is not invoked when `self` fails; the failure of `self` is
    /// returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valval::prelude::*;
    ///
    /// let v = greater_than(0.0).and(less_than(10.0));
    /// assert!(v.validate(&Value::from(5)).is_ok());
    /// assert!(v.validate(&Value::from(0)).is_err());
    /// assert!(v.validate(&Value::from(10)).is_err());
    /// ```
    fn and<V: Validator<T>>(self, other: V) -> And<Self, V> {
        And(self, other)
    }

    /// At least one validator must pass.
    ///
    /// `other` is only invoked when `self` fails. If both fail, the failure
    /// of `self` is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valval::prelude::*;
    ///
    /// let v = less_than(0.0).or(greater_than(100.0));
    /// assert!(v.validate(&Value::from(-5)).is_ok());
    /// assert!(v.validate(&Value::from(150)).is_ok());
    /// assert_eq!(
    ///     v.validate(&Value::from(50)).unwrap_err().to_string(),
    ///     "must be less than 0"
    /// );
    /// ```
    fn or<V: Validator<T>>(self, other: V) -> Or<Self, V> {
        Or(self, other)
    }

    /// Erase the concrete type so validators of different types can share a list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valval::prelude::*;
    ///
    /// let v = all_of([min_length(2).boxed(), max_length(4).boxed()]);
    /// assert!(v.validate(&Value::from("abc")).is_ok());
    /// ```
    fn boxed(self) -> BoxValidator<T>
    where
        Self: 'static,
    {
        BoxValidator(Box::new(self))
    }
}

impl<T: ?Sized, V: Validator<T>> ValidatorExt<T> for V {}

/// A type-erased validator.
pub struct BoxValidator<T: ?Sized>(Box<dyn Validator<T>>);

impl<T: ?Sized> BoxValidator<T> {
    /// Box `validator`.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validator<T> + 'static,
    {
        BoxValidator(Box::new(validator))
    }
}

impl<T: ?Sized> Validator<T> for BoxValidator<T> {
    #[inline]
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        self.0.validate(value)
    }
}

impl<T: ?Sized> fmt::Debug for BoxValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxValidator")
    }
}

/// AND combinator - both validators must pass.
#[derive(Clone, Copy, Debug)]
pub struct And<V1, V2>(pub V1, pub V2);

impl<T: ?Sized, V1: Validator<T>, V2: Validator<T>> Validator<T> for And<V1, V2> {
    #[inline]
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        self.0.validate(value)?;
        self.1.validate(value)
    }
}

/// OR combinator - at least one validator must pass.
#[derive(Clone, Copy, Debug)]
pub struct Or<V1, V2>(pub V1, pub V2);

impl<T: ?Sized, V1: Validator<T>, V2: Validator<T>> Validator<T> for Or<V1, V2> {
    #[inline]
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        match self.0.validate(value) {
            Ok(()) => Ok(()),
            Err(first) => self.1.validate(value).map_err(|_| first),
        }
    }
}

/// All validators must pass, checked in order.
///
/// Stops at the first failure and returns it. An empty list passes.
pub struct AllOf<T: ?Sized>(Vec<BoxValidator<T>>);

impl<T: ?Sized> AllOf<T> {
    /// Number of validators in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: ?Sized> Validator<T> for AllOf<T> {
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        for validator in &self.0 {
            validator.validate(value)?;
        }
        Ok(())
    }
}

impl<T: ?Sized> fmt::Debug for AllOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AllOf").field(&self.0.len()).finish()
    }
}

/// Create a validator that passes only if every given validator passes.
///
/// Validators run in order. The first failure is returned and the
/// remaining validators are not invoked.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let username = all_of([
///     min_length(3).boxed(),
///     max_length(20).boxed(),
///     matches_pattern("^[a-z_]+$").unwrap().boxed(),
/// ]);
///
/// assert!(username.validate(&Value::from("john_doe")).is_ok());
/// assert_eq!(
///     username.validate(&Value::from("jo")).unwrap_err().to_string(),
///     "length must be 3 or greater"
/// );
/// ```
pub fn all_of<T, I>(validators: I) -> AllOf<T>
where
    T: ?Sized,
    I: IntoIterator<Item = BoxValidator<T>>,
{
    AllOf(validators.into_iter().collect())
}

/// At least one validator must pass, checked in order.
///
/// Stops at the first success. When every validator fails, the failure of
/// the first one attempted is returned. An empty list passes.
pub struct AnyOf<T: ?Sized>(Vec<BoxValidator<T>>);

impl<T: ?Sized> AnyOf<T> {
    /// Number of validators in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: ?Sized> Validator<T> for AnyOf<T> {
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        let mut first_error = None;
        for validator in &self.0 {
            match validator.validate(value) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<T: ?Sized> fmt::Debug for AnyOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyOf").field(&self.0.len()).finish()
    }
}

/// Create a validator that passes if any given validator passes.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let small_or_huge = any_of([less_than(10.0).boxed(), greater_than(1000.0).boxed()]);
///
/// assert!(small_or_huge.validate(&Value::from(5)).is_ok());
/// assert!(small_or_huge.validate(&Value::from(5000)).is_ok());
/// // Both fail: the first failure is reported
/// assert_eq!(
///     small_or_huge.validate(&Value::from(50)).unwrap_err().to_string(),
///     "must be less than 10"
/// );
/// ```
pub fn any_of<T, I>(validators: I) -> AnyOf<T>
where
    T: ?Sized,
    I: IntoIterator<Item = BoxValidator<T>>,
{
    AnyOf(validators.into_iter().collect())
}

/// Build an [`AllOf`] from validators of different types, boxing each one.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let v = valval::all_of![greater_than(0.0), less_than(10.0)];
/// assert!(v.validate(&Value::from(3)).is_ok());
/// ```
#[macro_export]
macro_rules! all_of {
    ($($validator:expr),* $(,)?) => {
        $crate::all_of([$($crate::ValidatorExt::boxed($validator)),*])
    };
}

/// Build an [`AnyOf`] from validators of different types, boxing each one.
///
/// # Example
///
/// ```rust
/// use valval::prelude::*;
///
/// let v = valval::any_of![member_of([Value::Null]), min_length(1)];
/// assert!(v.validate(&Value::Null).is_ok());
/// assert!(v.validate(&Value::from("x")).is_ok());
/// ```
#[macro_export]
macro_rules! any_of {
    ($($validator:expr),* $(,)?) => {
        $crate::any_of([$($crate::ValidatorExt::boxed($validator)),*])
    };
}

//! Tracing support for validators.
//!
//! This module provides the `Traced` wrapper and the `traced` method for
//! recording validator outcomes as tracing events. Only compiled with the
//! `tracing` feature.

use crate::error::ValidationError;

use super::combinators::Validator;

/// A validator whose outcomes are recorded as tracing events.
///
/// Created by [`ValidatorTracingExt::traced`].
#[derive(Clone, Debug)]
pub struct Traced<V> {
    pub(crate) inner: V,
    pub(crate) name: &'static str,
}

impl<T: ?Sized, V: Validator<T>> Validator<T> for Traced<V> {
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        let result = self.inner.validate(value);
        match &result {
            Ok(()) => tracing::trace!(validator = self.name, "validation passed"),
            Err(err) => tracing::debug!(validator = self.name, error = %err, "validation failed"),
        }
        result
    }
}

/// Extension trait for adding tracing to validators.
pub trait ValidatorTracingExt<T: ?Sized>: Validator<T> + Sized {
    /// Record every call to this validator under `name`.
    ///
    /// Passing calls emit a `TRACE` event; failing calls emit a `DEBUG`
    /// event carrying the error. The result itself is returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use valval::prelude::*;
    /// use valval::validator::tracing::ValidatorTracingExt;
    ///
    /// let age = at_least(0.0).and(at_most(150.0)).traced("age");
    /// age.validate(&Value::from(200)); // DEBUG validator="age" error=must be 150 or less
    /// ```
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced { inner: self, name }
    }
}

impl<T: ?Sized, V: Validator<T>> ValidatorTracingExt<T> for V {}

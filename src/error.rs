//! Failure descriptions returned by validators
//!
//! A validator either succeeds with `Ok(())` or returns a [`ValidationError`].
//! There are two kinds of failure:
//!
//! - a **type mismatch**, when the candidate's runtime shape is not what the
//!   validator expects (for example a string handed to a numeric bound);
//! - a **constraint violation**, when the candidate is well-typed but breaks
//!   the rule. The [`Constraint`] always carries the violated parameter.
//!
//! Checks written by hand can report free-form failures with
//! [`ValidationError::custom`].
//!
//! # Examples
//!
//! ```
//! use valval::{Constraint, ValidationError, ValueKind};
//!
//! let err = ValidationError::type_mismatch(ValueKind::Number, ValueKind::String);
//! assert_eq!(err.to_string(), "not a number (got a string)");
//!
//! let err = ValidationError::violation(Constraint::MinLength(3));
//! assert_eq!(err.to_string(), "length must be 3 or greater");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::value::{Value, ValueKind};

/// The rule a well-typed candidate failed, together with its parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Constraint {
    /// Value must be strictly greater than the threshold
    GreaterThan(f64),
    /// Value must be greater than or equal to the minimum
    AtLeast(f64),
    /// Value must be strictly less than the threshold
    LessThan(f64),
    /// Value must be less than or equal to the maximum
    AtMost(f64),
    /// Text must match the pattern (holds the pattern source)
    Pattern(String),
    /// Text must have at least this many code points
    MinLength(usize),
    /// Text must have at most this many code points
    MaxLength(usize),
    /// Sequence must have at least this many elements
    MinItems(usize),
    /// Sequence must have at most this many elements
    MaxItems(usize),
    /// Value must equal one of the listed values
    OneOf(Vec<Value>),
    /// Record field must be present and non-null
    Required(String),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::GreaterThan(t) => write!(f, "must be greater than {}", t),
            Constraint::AtLeast(m) => write!(f, "must be {} or greater", m),
            Constraint::LessThan(t) => write!(f, "must be less than {}", t),
            Constraint::AtMost(m) => write!(f, "must be {} or less", m),
            Constraint::Pattern(src) => write!(f, "must match the pattern {}", src),
            Constraint::MinLength(n) | Constraint::MinItems(n) => {
                write!(f, "length must be {} or greater", n)
            }
            Constraint::MaxLength(n) | Constraint::MaxItems(n) => {
                write!(f, "length must be {} or less", n)
            }
            Constraint::OneOf(allowed) => {
                f.write_str("invalid value. allowed are [")?;
                for (i, v) in allowed.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
            Constraint::Required(key) => write!(f, "field {} is required", key),
        }
    }
}

/// Why a candidate did not pass a validator.
///
/// # Examples
///
/// ```
/// use valval::{Constraint, ValidationError};
///
/// let err = ValidationError::violation(Constraint::Required("email".into()));
/// assert!(err.is_violation());
/// assert_eq!(err.constraint(), Some(&Constraint::Required("email".into())));
/// assert_eq!(err.to_string(), "field email is required");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValidationError {
    /// The candidate has the wrong runtime shape
    TypeMismatch {
        /// What the validator expected
        expected: ValueKind,
        /// What it was given
        found: ValueKind,
    },
    /// The candidate is well-typed but breaks the rule
    Violation(Constraint),
    /// Free-form failure from a hand-written check
    Custom(String),
}

impl ValidationError {
    /// Create a type-mismatch failure.
    pub fn type_mismatch(expected: ValueKind, found: ValueKind) -> Self {
        ValidationError::TypeMismatch { expected, found }
    }

    /// Create a constraint-violation failure.
    pub fn violation(constraint: Constraint) -> Self {
        ValidationError::Violation(constraint)
    }

    /// Create a free-form failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use valval::ValidationError;
    ///
    /// let err = ValidationError::custom("must be even");
    /// assert_eq!(err.to_string(), "must be even");
    /// ```
    pub fn custom(message: impl Into<String>) -> Self {
        ValidationError::Custom(message.into())
    }

    /// `true` if the candidate had the wrong shape.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ValidationError::TypeMismatch { .. })
    }

    /// `true` if the candidate broke a built-in constraint.
    pub fn is_violation(&self) -> bool {
        matches!(self, ValidationError::Violation(_))
    }

    /// The violated constraint, if this is a violation.
    pub fn constraint(&self) -> Option<&Constraint> {
        match self {
            ValidationError::Violation(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TypeMismatch { expected, found } => {
                write!(f, "not {} (got {})", expected, found)
            }
            ValidationError::Violation(c) => write!(f, "{}", c),
            ValidationError::Custom(msg) => f.write_str(msg),
        }
    }
}

impl StdError for ValidationError {}

impl From<Constraint> for ValidationError {
    fn from(constraint: Constraint) -> Self {
        ValidationError::Violation(constraint)
    }
}

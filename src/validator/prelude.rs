//! Validator prelude for convenient imports
//!
//! This module re-exports the validator trait, the constructors, and the
//! value and error types they work with.
//!
//! # Example
//!
//! ```rust
//! use valval::prelude::*;
//!
//! let valid_age = at_least(0.0).and(at_most(150.0));
//! assert!(valid_age.validate(&Value::from(25)).is_ok());
//! ```

// Core trait
pub use super::combinators::{Validator, ValidatorExt};

// Combinators
pub use super::combinators::{all_of, any_of, BoxValidator};

// Adapters
pub use super::adapters::{number, optional_text, record_of, sequence_of, text};

// Number validators
pub use super::number::{at_least, at_most, greater_than, less_than};

// String validators
pub use super::string::{
    matches, matches_pattern, max_length, min_length, nullable_max_length, nullable_min_length,
};

// Collection validators
pub use super::collection::{max_items, min_items, required_fields};

// Membership
pub use super::membership::member_of;

// Values and errors
pub use crate::error::{Constraint, ValidationError};
pub use crate::value::{Record, Value, ValueKind};

//! Validators and combinators
//!
//! A validator checks one candidate and returns `Ok(())` or the
//! [`ValidationError`](crate::ValidationError) explaining why it failed.
//! This module provides:
//!
//! - the [`Validator`] trait, implemented by every validator and by closures;
//! - adapters lifting typed checks (`f64`, `str`, `Option<String>`,
//!   sequences, records) to validators over [`Value`](crate::Value);
//! - leaf constructors for numeric bounds, text length and pattern, and set
//!   membership;
//! - collection constructors for element counts and required fields;
//! - the [`all_of`] / [`any_of`] combinators and their binary forms
//!   [`ValidatorExt::and`] / [`ValidatorExt::or`].
//!
//! # Example
//!
//! ```rust
//! use valval::prelude::*;
//!
//! let port = all_of([
//!     at_least(1.0).boxed(),
//!     at_most(65535.0).boxed(),
//! ]);
//! assert!(port.validate(&Value::from(8080)).is_ok());
//! assert!(port.validate(&Value::from(0)).is_err());
//!
//! // Either a keyword or a number
//! let timeout = member_of(["never"]).or(greater_than(0.0));
//! assert!(timeout.validate(&Value::from("never")).is_ok());
//! assert!(timeout.validate(&Value::from(30)).is_ok());
//! ```

mod adapters;
mod collection;
mod combinators;
mod membership;
mod number;
mod string;
#[cfg(feature = "tracing")]
pub mod tracing;

pub mod prelude;

// Re-export core trait
pub use combinators::{Validator, ValidatorExt};

// Re-export combinator types
pub use combinators::{all_of, any_of, AllOf, And, AnyOf, BoxValidator, Or};

// Re-export adapters
pub use adapters::{
    number, optional_text, record_of, sequence_of, text, Number, OptionalText, RecordOf,
    SequenceOf, Text,
};

// Re-export number validators
pub use number::{at_least, at_most, greater_than, less_than, AtLeast, AtMost, GreaterThan, LessThan};

// Re-export string validators
pub use string::{
    matches, matches_pattern, max_length, min_length, nullable_max_length, nullable_min_length,
    MaxLength, MinLength, NullableMaxLength, NullableMinLength, Pattern,
};

// Re-export collection validators
pub use collection::{max_items, min_items, required_fields, MaxItems, MinItems, RequiredFields};

// Re-export membership
pub use membership::{member_of, MemberOf};

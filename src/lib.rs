//! # valval
//!
//! Small, composable validators for loosely-typed values.
//!
//! ## Philosophy
//!
//! Every validator is a pure check: it looks at one candidate, never mutates
//! it, keeps no state, and returns either `Ok(())` or a [`ValidationError`]
//! explaining what went wrong. Larger rules are built by composing small
//! ones with [`all_of`] and [`any_of`].
//!
//! - **Leaves** check one thing: a numeric bound, a text length or pattern,
//!   membership in a set, an element count, required fields.
//! - **Adapters** guard the boundary: a numeric check only ever sees numbers,
//!   anything else is reported as a type mismatch.
//! - **Combinators** compose validators of the same shape and report the
//!   earliest failure.
//!
//! ## Quick Example
//!
//! ```rust
//! use valval::prelude::*;
//! use valval::record;
//!
//! let username = all_of([
//!     min_length(3).boxed(),
//!     max_length(16).boxed(),
//!     matches_pattern("^[a-z0-9_]+$").unwrap().boxed(),
//! ]);
//! let age = at_least(13.0).and(less_than(150.0));
//! let role = member_of(["admin", "editor", "viewer"]);
//! let form = record_of(required_fields(["username", "age"]));
//!
//! let input = record! { "username" => "jo", "age" => 30, "role" => "owner" };
//! assert!(form.validate(&input).is_ok());
//!
//! let fields = input.as_record().unwrap();
//! assert_eq!(
//!     username.validate(&fields["username"]).unwrap_err().to_string(),
//!     "length must be 3 or greater"
//! );
//! assert!(age.validate(&fields["age"]).is_ok());
//! assert_eq!(
//!     role.validate(&fields["role"]).unwrap_err().to_string(),
//!     r#"invalid value. allowed are ["admin", "editor", "viewer"]"#
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: `validator::tracing` wraps validators to emit events for
//!   each check.
//! - `serde`: `Serialize` for [`Value`], [`ValidationError`] and friends,
//!   so failures can be reported as structured data.
//! - `proptest`: `Arbitrary` for [`Value`] and `testing::arb_value`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use error::{Constraint, ValidationError};
pub use validator::{all_of, any_of, BoxValidator, Validator, ValidatorExt};
pub use value::{Record, Value, ValueKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::validator::prelude::*;
}

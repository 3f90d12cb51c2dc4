//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//! - **Running**: [`validate`], [`is`], [`assert_is`] and their curried forms
//! - **Construction**: [`validator`], [`validator_for`]
//!
//! # Narrowing
//!
//! A validator is a function from a borrowed input to either an owned,
//! narrower output or a [`ValidationError`]. Composite validators pass
//! outputs along, so the type of a composed validator's output says exactly
//! what has been checked:
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let tags = array_of(string());
//!
//! let input = Value::array(["a", "b"]);
//! let checked: Array = tags.validate(&input).unwrap_or_default();
//! assert_eq!(checked.len(), 2);
//! ```
//!
//! # Reasons
//!
//! Failures carry a tree of messages, outermost context first:
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let user = props(Props::new().field("age", number()));
//! let object = Object::builder().property("age", "old").build();
//!
//! let reason = user.validate(&Value::from(object)).err();
//! assert_eq!(
//!     reason.as_ref().map(|r| r.leaf_messages()),
//!     Some(vec!["The value is not a number."])
//! );
//! ```

pub mod custom;
pub mod error;
pub mod run;
pub mod traits;

pub use custom::{FnValidator, ValidatorFor, validator, validator_for};
pub use error::{Tree, ValidationError};
pub use run::{assert_is, is, is_fn, validate, validate_fn};
pub use traits::{BoxedValidator, Validate, ValidateExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

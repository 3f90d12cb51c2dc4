//! # sift-validator
//!
//! Composable validators that narrow loosely typed values to typed results.
//!
//! ## Quick Start
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let user = props(
//!     Props::new()
//!         .field("name", string())
//!         .field("tags", array_of(string()))
//!         .optional_field("age", number()),
//! );
//!
//! let input = Value::from(serde_json::json!({ "name": "ann", "tags": ["a"] }));
//! assert!(is(&input, &user));
//!
//! let input = Value::from(serde_json::json!({ "name": "ann", "tags": [1] }));
//! let reason = validate(&input, &user).err();
//! assert_eq!(
//!     reason.map(|r| r.tree().to_string()),
//!     Some(
//!         "The property \"tags\" is invalid.\n  \
//!          The element at index 0 is invalid.\n    \
//!          The value is not a string."
//!             .to_owned()
//!     )
//! );
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! [`validator`](foundation::validator) for closures, or implement
//! [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Kinds**: [`IsString`](validators::IsString), [`IsNumber`](validators::IsNumber),
//!   [`IsObject`](validators::IsObject), [`IsArray`](validators::IsArray) and friends
//! - **Literals**: [`Equal`](validators::Equal), [`OneOf`](validators::OneOf)
//! - **Shapes**: [`StrictProp`](combinators::StrictProp), [`StrictProps`](combinators::StrictProps),
//!   [`StrictDict`](combinators::StrictDict), [`StrictArrayOf`](combinators::StrictArrayOf),
//!   [`StrictTuple`](combinators::StrictTuple)
//! - **Logic**: [`Or`](combinators::Or), [`And`](combinators::And), [`Not`](combinators::Not)

// Deep combinator nesting (Pipe<IsObject, StrictProps>, Or<(A, Not<B, T>)>, ...)
// produces complex types that come with the typed combinator design.
#![allow(clippy::type_complexity)]

mod macros;

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;

pub use sift_value as value;

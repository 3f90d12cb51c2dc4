//! # sift-value
//!
//! The dynamic value model that `sift-validator` narrows.
//!
//! A [`Value`] is one of the runtime kinds a loosely typed host hands over:
//! `undefined`, `null`, booleans, numbers, bigints, strings, symbols and
//! objects. Objects are immutable, reference-counted handles with identity.
//! They carry an internal [`ObjectKind`] (ordinary, array, function or boxed
//! primitive), their own properties, an optional prototype that supplies
//! inherited properties, and an optional [`Class`] tag used by instance
//! checks.
//!
//! ```rust
//! use sift_value::{Object, PropertyKey, Value};
//!
//! let proto = Object::builder().property("greet", "hi").build();
//! let user = Object::builder()
//!     .property("name", "alice")
//!     .prototype(proto)
//!     .build();
//!
//! assert!(user.has_own(&PropertyKey::from("name")));
//! assert!(!user.has_own(&PropertyKey::from("greet")));
//! assert!(user.has(&PropertyKey::from("greet")));
//! assert_eq!(Value::from(user).kind().as_str(), "object");
//! ```
//!
//! JSON documents convert losslessly enough for validation purposes:
//!
//! ```rust
//! use sift_value::Value;
//!
//! let value = Value::from(serde_json::json!({ "tags": ["a", "b"] }));
//! assert!(value.is_object());
//! ```

mod class;
mod conversions;
mod display;
mod key;
mod kind;
mod object;
mod serialize;
mod symbol;
mod value;

pub use class::Class;
pub use display::format_number;
pub use key::PropertyKey;
pub use kind::ValueKind;
pub use object::{Array, Function, Object, ObjectBuilder, ObjectKind, Primitive};
pub use symbol::Symbol;
pub use value::Value;

/// Common imports for working with values.
pub mod prelude {
    pub use crate::{
        Array, Class, Function, Object, ObjectBuilder, ObjectKind, Primitive, PropertyKey, Symbol,
        Value, ValueKind,
    };
}

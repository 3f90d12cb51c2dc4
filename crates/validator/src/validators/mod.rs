//! Built-in validators
//!
//! Leaf validators that inspect a single [`Value`](sift_value::Value).
//!
//! # Categories
//!
//! - **Kinds**: [`string`], [`number`], [`boolean`], [`bigint`], [`symbol`],
//!   [`null`], [`undefined`], [`nullish`], [`function`], [`object`], [`array`]
//! - **Literals**: [`equal()`], [`one_of`], [`loose_one_of`]
//! - **Classes**: [`instance_of`]
//! - **Keys**: [`property_key`], [`key_of`], [`strict_key_of`]
//! - **Never failing**: [`unknown`], [`to_object`]
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let level = one_of(["debug", "info"]);
//! assert!(level.validate(&Value::from("info")).is_ok());
//!
//! let config = Object::builder().property("port", 80).build();
//! assert!(key_of(&config).validate(&Value::from("port")).is_ok());
//! assert!(key_of(&config).validate(&Value::from("host")).is_err());
//! ```

pub mod equal;
pub mod instance;
pub mod key;
pub mod primitive;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use equal::{Equal, OneOf, equal, loose_one_of, one_of};
pub use instance::{InstanceOf, instance_of};
pub use key::{IsPropertyKey, KeyOfOptions, StrictKeyOf, key_of, property_key, strict_key_of};
pub use primitive::{
    IsArray, IsBigInt, IsBoolean, IsFunction, IsNull, IsNullish, IsNumber, IsObject, IsString,
    IsSymbol, IsUndefined, ToObject, Unknown, array, bigint, boolean, function, null, nullish,
    number, object, string, symbol, to_object, undefined, unknown,
};

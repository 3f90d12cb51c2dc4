//! Kind validators
//!
//! One validator per value kind, each narrowing a [`Value`] to the payload of
//! that kind. Boxed primitives are objects: `string()` rejects a boxed
//! string just as it rejects a number.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! assert_eq!(number().validate(&Value::from(1.5)), Ok(1.5));
//! assert!(string().validate(&Value::from(0)).is_err());
//!
//! let boxed = Value::from(Value::from("x").to_object());
//! assert!(string().validate(&boxed).is_err());
//! assert!(object().validate(&boxed).is_ok());
//! ```

use std::sync::Arc;

use sift_value::{Array, Function, Object, Symbol, Value};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PRIMITIVE KINDS
// ============================================================================

crate::validator! {
    /// Accepts strings.
    pub IsString for Value => Arc<str>;
    narrow(input) { input.as_string().cloned() }
    error(input) { "The value is not a string." }
    fn string();
}

crate::validator! {
    /// Accepts numbers, including `NaN` and the infinities.
    pub IsNumber for Value => f64;
    narrow(input) { input.as_number() }
    error(input) { "The value is not a number." }
    fn number();
}

crate::validator! {
    /// Accepts `true` and `false`.
    pub IsBoolean for Value => bool;
    narrow(input) { input.as_bool() }
    error(input) { "The value is not a boolean." }
    fn boolean();
}

crate::validator! {
    /// Accepts bigints.
    pub IsBigInt for Value => i128;
    narrow(input) { input.as_bigint() }
    error(input) { "The value is not a bigint." }
    fn bigint();
}

crate::validator! {
    /// Accepts symbols.
    pub IsSymbol for Value => Symbol;
    narrow(input) { input.as_symbol().cloned() }
    error(input) { "The value is not a symbol." }
    fn symbol();
}

crate::validator! {
    /// Accepts `null`.
    pub IsNull for Value => Value;
    narrow(input) { input.is_null().then_some(Value::Null) }
    error(input) { "The value is not null." }
    fn null();
}

crate::validator! {
    /// Accepts `undefined`.
    pub IsUndefined for Value => Value;
    narrow(input) { input.is_undefined().then_some(Value::Undefined) }
    error(input) { "The value is not undefined." }
    fn undefined();
}

crate::validator! {
    /// Accepts `null` and `undefined`.
    pub IsNullish for Value => Value;
    narrow(input) { input.is_nullish().then(|| input.clone()) }
    error(input) { "The value is not null or undefined." }
    fn nullish();
}

// ============================================================================
// OBJECT KINDS
// ============================================================================

crate::validator! {
    /// Accepts callable objects.
    pub IsFunction for Value => Function;
    narrow(input) { input.as_function() }
    error(input) { "The value is not a function." }
    fn function();
}

crate::validator! {
    /// Accepts every object, arrays and functions included. `null` is not an
    /// object here.
    pub IsObject for Value => Object;
    narrow(input) { input.as_object().cloned() }
    error(input) { "The value is not an object." }
    fn object();
}

crate::validator! {
    /// Accepts arrays.
    pub IsArray for Value => Array;
    narrow(input) { input.as_array() }
    error(input) { "The value is not an array." }
    fn array();
}

// ============================================================================
// NEVER-FAILING
// ============================================================================

/// Accepts anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unknown;

impl Validate for Unknown {
    type Input = Value;
    type Output = Value;

    fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        Ok(input.clone())
    }
}

/// Creates an [`Unknown`] validator.
#[must_use]
pub const fn unknown() -> Unknown {
    Unknown
}

/// Converts any value to an object.
///
/// Objects pass through, primitives are boxed, and `null` / `undefined`
/// become an empty object. Used by the `loose_*` shape validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ToObject;

impl Validate for ToObject {
    type Input = Value;
    type Output = Object;

    fn validate(&self, input: &Value) -> Result<Object, ValidationError> {
        Ok(input.to_object())
    }
}

/// Creates a [`ToObject`] validator.
#[must_use]
pub const fn to_object() -> ToObject {
    ToObject
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_value::PropertyKey;

    #[test]
    fn test_string() {
        assert_eq!(string().validate(&Value::from("")), Ok(Arc::from("")));
        assert_eq!(
            string().validate(&Value::from(0)),
            Err(ValidationError::new("The value is not a string."))
        );
    }

    #[test]
    fn test_number_accepts_nan() {
        assert!(number().validate(&Value::Number(f64::NAN)).is_ok());
        assert!(number().validate(&Value::BigInt(1)).is_err());
    }

    #[test]
    fn test_nullish() {
        assert_eq!(nullish().validate(&Value::Null), Ok(Value::Null));
        assert_eq!(nullish().validate(&Value::Undefined), Ok(Value::Undefined));
        assert!(nullish().validate(&Value::from(false)).is_err());
    }

    #[test]
    fn test_object_includes_arrays_and_functions() {
        assert!(object().validate(&Value::array([1])).is_ok());
        assert!(object().validate(&Value::from(Function::new("f", 0))).is_ok());
        assert_eq!(
            object().validate(&Value::Null),
            Err(ValidationError::new("The value is not an object."))
        );
    }

    #[test]
    fn test_array_and_function_are_exclusive() {
        let array_value = Value::array(["a"]);
        let function_value = Value::from(Function::new("f", 0));

        assert!(array().validate(&array_value).is_ok());
        assert!(array().validate(&function_value).is_err());
        assert!(function().validate(&function_value).is_ok());
        assert!(function().validate(&array_value).is_err());
    }

    #[test]
    fn test_unknown_returns_input() {
        let value = Value::array([1, 2]);
        assert_eq!(unknown().validate(&value), Ok(value));
    }

    #[test]
    fn test_to_object_boxes() {
        let boxed = to_object().validate(&Value::from("abc"));
        assert!(boxed.is_ok_and(|o| o.has_own(&PropertyKey::from("length"))));

        let object = Object::new();
        assert_eq!(
            to_object().validate(&Value::from(object.clone())),
            Ok(object)
        );
    }
}

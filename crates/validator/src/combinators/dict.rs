//! Dictionary validators
//!
//! A dictionary is an object used as a map: every own enumerable key must
//! pass one validator and every value another.

use sift_value::{Object, Value};

use crate::combinators::Pipe;
use crate::foundation::{Validate, ValidationError};
use crate::validators::{IsObject, ToObject};

/// Checks every own enumerable property of an object.
///
/// Keys are handed to the key validator as values: string keys as strings
/// (array indices included), symbol keys as symbols. Properties are checked
/// in enumeration order and the first failing key or value is reported.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let scores = strict_dict(string(), number());
/// let good = Object::builder().property("ann", 3).property("bob", 5).build();
/// let bad = Object::builder().property("ann", 3).property("bob", "5").build();
///
/// assert!(scores.validate(&good).is_ok());
/// assert_eq!(
///     scores.validate(&bad),
///     Err(ValidationError::wrapped(
///         "The property \"bob\" is invalid.",
///         "The value is not a number."
///     ))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictDict<K, V> {
    key: K,
    value: V,
}

impl<K, V> StrictDict<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key_validator(&self) -> &K {
        &self.key
    }

    pub fn value_validator(&self) -> &V {
        &self.value
    }
}

impl<K, V> Validate for StrictDict<K, V>
where
    K: Validate<Input = Value>,
    V: Validate<Input = Value>,
{
    type Input = Object;
    type Output = Object;

    fn validate(&self, object: &Object) -> Result<Object, ValidationError> {
        for key in object.own_keys() {
            self.key
                .validate(&Value::from(key.clone()))
                .map_err(|cause| {
                    ValidationError::wrapped(format!("The key \"{key}\" is invalid."), cause)
                })?;

            let value = object.get_own(&key).unwrap_or_default();
            self.value.validate(&value).map_err(|cause| {
                ValidationError::wrapped(format!("The property \"{key}\" is invalid."), cause)
            })?;
        }

        Ok(object.clone())
    }
}

/// Creates a [`StrictDict`] validator.
pub fn strict_dict<K, V>(key: K, value: V) -> StrictDict<K, V>
where
    K: Validate<Input = Value>,
    V: Validate<Input = Value>,
{
    StrictDict::new(key, value)
}

/// Like [`strict_dict`], but accepts any value and requires it to be an
/// object.
pub fn dict<K, V>(key: K, value: V) -> Pipe<IsObject, StrictDict<K, V>>
where
    K: Validate<Input = Value>,
    V: Validate<Input = Value>,
{
    Pipe::new(IsObject, strict_dict(key, value))
}

/// Like [`strict_dict`], but accepts any value and converts it to an object
/// first.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// // A string's own enumerable keys are its character indices.
/// let letters = loose_dict(string(), string());
/// assert!(letters.validate(&Value::from("ab")).is_ok());
/// assert!(letters.validate(&Value::Null).is_ok());
/// ```
pub fn loose_dict<K, V>(key: K, value: V) -> Pipe<ToObject, StrictDict<K, V>>
where
    K: Validate<Input = Value>,
    V: Validate<Input = Value>,
{
    Pipe::new(ToObject, strict_dict(key, value))
}

//! OPTIONAL / NULLABLE combinators - let an empty value through

use sift_value::Value;

use crate::foundation::{Validate, ValidationError};

/// Accepts `undefined`, otherwise delegates to the inner validator.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let nickname = optional(string());
/// assert_eq!(nickname.validate(&Value::Undefined), Ok(Value::Undefined));
/// assert_eq!(nickname.validate(&Value::from("al")), Ok(Value::from("al")));
/// assert!(nickname.validate(&Value::Null).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Optional<V>
where
    V: Validate<Input = Value>,
    V::Output: Into<Value>,
{
    type Input = Value;
    type Output = Value;

    fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        if input.is_undefined() {
            Ok(Value::Undefined)
        } else {
            self.inner.validate(input).map(Into::into)
        }
    }
}

pub fn optional<V>(validator: V) -> Optional<V> {
    Optional::new(validator)
}

/// Accepts `null`, otherwise delegates to the inner validator.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let parent = nullable(object());
/// assert_eq!(parent.validate(&Value::Null), Ok(Value::Null));
/// assert!(parent.validate(&Value::Undefined).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullable<V> {
    pub(crate) inner: V,
}

impl<V> Nullable<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Nullable<V>
where
    V: Validate<Input = Value>,
    V::Output: Into<Value>,
{
    type Input = Value;
    type Output = Value;

    fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        if input.is_null() {
            Ok(Value::Null)
        } else {
            self.inner.validate(input).map(Into::into)
        }
    }
}

pub fn nullable<V>(validator: V) -> Nullable<V> {
    Nullable::new(validator)
}

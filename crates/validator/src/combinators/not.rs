//! NOT combinator - logical negation of a validator
//!
//! This module provides the [`Not`] combinator, which succeeds exactly when
//! the wrapped validator fails.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

const NOT_FAILED: &str = "The value should not satisfy the validator.";

/// Inverts a validator.
///
/// Knowing that a value is *not* something rarely yields a narrower type,
/// so the output type `T` is chosen by the caller and built from an owned
/// copy of the input. `T = Value` is the usual choice.
///
/// The inner validator's reason is dropped: its failure is this
/// validator's success.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let present = not::<Value, _>(nullish());
/// assert!(present.validate(&Value::from(0)).is_ok());
/// assert_eq!(
///     present.validate(&Value::Null),
///     Err(ValidationError::new("The value should not satisfy the validator."))
/// );
/// ```
pub struct Not<V, T> {
    pub(crate) inner: V,
    _target: PhantomData<fn() -> T>,
}

impl<V, T> Not<V, T> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _target: PhantomData,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Not<V, T>
where
    V: Validate,
    V::Input: ToOwned,
    T: From<<V::Input as ToOwned>::Owned>,
{
    type Input = V::Input;
    type Output = T;

    fn validate(&self, input: &Self::Input) -> Result<T, ValidationError> {
        match self.inner.validate(input) {
            Ok(_) => Err(ValidationError::new(NOT_FAILED)),
            Err(_) => Ok(T::from(input.to_owned())),
        }
    }
}

impl<V: Clone, T> Clone for Not<V, T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<V: fmt::Debug, T> fmt::Debug for Not<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Not").field("inner", &self.inner).finish()
    }
}

/// Creates a `Not` combinator.
///
/// `T` is the output type; the validator type is inferred:
/// `not::<Value, _>(string())`.
pub fn not<T, V>(inner: V) -> Not<V, T> {
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{number, string};
    use sift_value::Value;

    #[test]
    fn test_not_inverts() {
        let not_string = not::<Value, _>(string());
        assert_eq!(not_string.validate(&Value::from(1)), Ok(Value::from(1)));
        assert!(not_string.validate(&Value::from("a")).is_err());
    }

    #[test]
    fn test_double_negation() {
        let v = number().not::<Value>().not::<Value>();
        assert!(v.validate(&Value::from(1)).is_ok());
        assert!(v.validate(&Value::from("1")).is_err());
    }

    #[test]
    fn test_custom_target_type() {
        struct NotANumber(Value);

        impl From<Value> for NotANumber {
            fn from(value: Value) -> Self {
                Self(value)
            }
        }

        let v = not::<NotANumber, _>(number());
        assert_eq!(
            v.validate(&Value::from("x")).map(|n| n.0),
            Ok(Value::from("x"))
        );
    }
}

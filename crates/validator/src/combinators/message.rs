//! Error context combinator
//!
//! [`WrapError`] puts a message of your choosing on top of whatever reason
//! the inner validator produced, keeping the inner reason as the cause.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Wraps a validator's failure reason in an outer message.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let port = number().wrap_error("The port is invalid.");
/// let reason = port.validate(&Value::from("80")).err();
///
/// assert_eq!(
///     reason,
///     Some(ValidationError::wrapped(
///         "The port is invalid.",
///         "The value is not a number."
///     ))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct WrapError<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WrapError<V> {
    /// Creates a new `WrapError` combinator.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns the outer message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for WrapError<V>
where
    V: Validate,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        self.inner
            .validate(input)
            .map_err(|cause| ValidationError::wrapped(self.message.clone(), cause))
    }
}

/// Creates a `WrapError` combinator.
pub fn wrap_error<V>(inner: V, message: impl Into<Cow<'static, str>>) -> WrapError<V>
where
    V: Validate,
{
    WrapError::new(inner, message)
}

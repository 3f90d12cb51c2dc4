//! Validators built from closures.
//!
//! The closure receives the input and returns the narrowed output or a
//! reason. Nested validators are delegated to with `?`, which makes the
//! first nested failure the closure's failure.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// A validator backed by a closure.
///
/// Created by [`validator`] or [`ValidatorFor::with`].
pub struct FnValidator<F, I: ?Sized, O> {
    body: F,
    _marker: PhantomData<fn(&I) -> O>,
}

impl<F, I: ?Sized, O> FnValidator<F, I, O>
where
    F: Fn(&I) -> Result<O, ValidationError>,
{
    pub fn new(body: F) -> Self {
        Self {
            body,
            _marker: PhantomData,
        }
    }
}

impl<F, I: ?Sized, O> Validate for FnValidator<F, I, O>
where
    F: Fn(&I) -> Result<O, ValidationError>,
{
    type Input = I;
    type Output = O;

    fn validate(&self, input: &I) -> Result<O, ValidationError> {
        (self.body)(input)
    }
}

impl<F: Clone, I: ?Sized, O> Clone for FnValidator<F, I, O> {
    fn clone(&self) -> Self {
        Self {
            body: self.body.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, I: ?Sized, O> fmt::Debug for FnValidator<F, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

/// Builds a validator from a closure.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let even = validator(|input: &Value| {
///     let n = number().validate(input)?;
///     if n % 2.0 == 0.0 {
///         Ok(n)
///     } else {
///         Err(ValidationError::new("The number is odd."))
///     }
/// });
///
/// assert_eq!(even.validate(&Value::from(4)), Ok(4.0));
/// assert!(even.validate(&Value::from(3)).is_err());
/// assert!(even.validate(&Value::from("4")).is_err());
/// ```
pub fn validator<I: ?Sized, O, F>(body: F) -> FnValidator<F, I, O>
where
    F: Fn(&I) -> Result<O, ValidationError>,
{
    FnValidator::new(body)
}

/// Fixes the output type of a closure validator up front.
///
/// Created by [`validator_for`].
pub struct ValidatorFor<O>(PhantomData<fn() -> O>);

impl<O> ValidatorFor<O> {
    /// Attaches the closure.
    pub fn with<I: ?Sized, F>(self, body: F) -> FnValidator<F, I, O>
    where
        F: Fn(&I) -> Result<O, ValidationError>,
    {
        FnValidator::new(body)
    }
}

impl<O> fmt::Debug for ValidatorFor<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValidatorFor")
    }
}

/// Starts a closure validator whose output type is `O`.
///
/// Useful when the closure body alone does not pin the output, e.g. when
/// it converts through `Into`.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// struct Port(u16);
///
/// impl From<f64> for Port {
///     fn from(n: f64) -> Self {
///         Port(n as u16)
///     }
/// }
///
/// let port = validator_for::<Port>().with(|input: &Value| {
///     number().validate(input).map(Into::into)
/// });
///
/// assert_eq!(port.validate(&Value::from(8080)).map(|p| p.0), Ok(8080));
/// ```
#[must_use]
pub const fn validator_for<O>() -> ValidatorFor<O> {
    ValidatorFor(PhantomData)
}

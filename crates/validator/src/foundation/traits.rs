//! Core traits for the validation system
//!
//! A validator inspects a borrowed input and either narrows it to an owned
//! output or explains why it cannot.

use std::borrow::Cow;
use std::sync::Arc;

use crate::combinators::{And, Not, Nullable, Optional, Or, Pipe, WrapError};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// `Input` is what the validator accepts, `Output` is what it guarantees on
/// success. A validator that only checks returns its input (or a cheap handle
/// to it); a validator that narrows returns the narrower type, e.g. `string()`
/// takes a [`Value`](sift_value::Value) and returns the `Arc<str>` inside it.
///
/// Validators are pure: running one twice on the same input gives the same
/// result, and running it never mutates the input.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     type Input = str;
///     type Output = String;
///
///     fn validate(&self, input: &str) -> Result<String, ValidationError> {
///         if input.is_empty() {
///             Err(ValidationError::new("The string is empty."))
///         } else {
///             Ok(input.to_owned())
///         }
///     }
/// }
///
/// assert_eq!(NonEmpty.validate("hi"), Ok("hi".to_owned()));
/// assert!(NonEmpty.validate("").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// The narrowed result of a successful validation.
    type Output;

    /// Validates the input, returning the narrowed output or the reason it
    /// was rejected.
    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;
    type Output = V::Output;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;
    type Output = V::Output;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;
    type Output = V::Output;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        (**self).validate(input)
    }
}

/// A type-erased validator.
///
/// Useful for recursive shapes (see [`lazy`](crate::combinators::lazy())) and
/// for storing validators of different types side by side.
pub type BoxedValidator<I, O> = Box<dyn Validate<Input = I, Output = O> + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let id = string().or(number());
/// assert!(id.validate(&Value::from("a1")).is_ok());
/// assert!(id.validate(&Value::from(7)).is_ok());
/// assert!(id.validate(&Value::Null).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Requires both validators to succeed.
    ///
    /// Runs left to right and stops at the first failure. The output is the
    /// original input.
    fn and<V>(self, other: V) -> And<(Self, V)>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new((self, other))
    }

    /// Requires at least one validator to succeed.
    ///
    /// Runs left to right and stops at the first success, whose output is
    /// returned as a [`Value`](sift_value::Value).
    fn or<V>(self, other: V) -> Or<(Self, V)>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new((self, other))
    }

    /// Inverts the validator.
    ///
    /// `T` is the type the input is known to be once this validator has
    /// rejected it; see [`Not`].
    fn not<T>(self) -> Not<Self, T> {
        Not::new(self)
    }

    /// Feeds this validator's output into `next`.
    fn pipe<V>(self, next: V) -> Pipe<Self, V>
    where
        V: Validate<Input = Self::Output>,
    {
        Pipe::new(self, next)
    }

    /// Wraps any failure in a reason carrying `message`.
    fn wrap_error(self, message: impl Into<Cow<'static, str>>) -> WrapError<Self> {
        WrapError::new(self, message)
    }

    /// Lets `undefined` through without running the validator.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Lets `null` through without running the validator.
    fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }

    /// Erases the validator's type.
    fn boxed(self) -> BoxedValidator<Self::Input, Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

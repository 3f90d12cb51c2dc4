//! Entry points for running a validator.
//!
//! Three flavors, each with a curried form:
//!
//! - [`validate`] returns the outcome as a [`ValidationResult`].
//! - [`is`] answers yes or no.
//! - [`assert_is`] returns the narrowed output or panics with the reason.

use tracing::{debug, trace};

use crate::foundation::{Validate, ValidationResult};

/// Runs `validator` on `input`.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let name = validate(&Value::from("alice"), &string()).map(|s| s.len());
/// assert_eq!(name, Ok(5));
/// ```
#[must_use = "validation result must be checked"]
pub fn validate<V>(input: &V::Input, validator: &V) -> ValidationResult<V::Output>
where
    V: Validate + ?Sized,
{
    let result = validator.validate(input);
    match &result {
        Ok(_) => trace!("validation succeeded"),
        Err(reason) => trace!(%reason, "validation failed"),
    }
    result
}

/// Binds `validator` into a reusable function.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let check = validate_fn(number());
/// assert_eq!(check(&Value::from(2)), Ok(2.0));
/// assert!(check(&Value::Null).is_err());
/// ```
pub fn validate_fn<V>(validator: V) -> impl Fn(&V::Input) -> ValidationResult<V::Output>
where
    V: Validate,
{
    move |input: &V::Input| validate(input, &validator)
}

/// Returns true if `validator` accepts `input`.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// assert!(is(&Value::Null, &null()));
/// assert!(!is(&Value::Undefined, &null()));
/// ```
#[must_use]
pub fn is<V>(input: &V::Input, validator: &V) -> bool
where
    V: Validate + ?Sized,
{
    validate(input, validator).is_ok()
}

/// Binds `validator` into a reusable predicate.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let is_number = is_fn(number());
/// let values = [Value::from(1), Value::from("a"), Value::from(2)];
/// let numbers = values.iter().filter(|v| is_number(v)).count();
/// assert_eq!(numbers, 2);
/// ```
pub fn is_fn<V>(validator: V) -> impl Fn(&V::Input) -> bool
where
    V: Validate,
{
    move |input: &V::Input| is(input, &validator)
}

/// Returns the narrowed output, or panics with the rejection reason.
///
/// The panic payload is the [`ValidationError`](crate::foundation::ValidationError)
/// itself, so it can be recovered with
/// [`std::panic::catch_unwind`] and `downcast`.
///
/// # Panics
///
/// Panics if `validator` rejects `input`.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let flag = assert_is(&Value::from(true), &boolean());
/// assert!(flag);
/// ```
#[track_caller]
pub fn assert_is<V>(input: &V::Input, validator: &V) -> V::Output
where
    V: Validate + ?Sized,
{
    match validator.validate(input) {
        Ok(output) => output,
        Err(reason) => {
            debug!(%reason, "assertion failed");
            std::panic::panic_any(reason)
        }
    }
}

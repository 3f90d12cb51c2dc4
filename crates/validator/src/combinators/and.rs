//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator: every validator must accept
//! the input for the combined validator to succeed.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let named = and((object(), prop("name", string())));
//!
//! let value = Value::from(Object::builder().property("name", "x").build());
//! assert_eq!(named.validate(&value), Ok(value.clone()));
//! assert!(named.validate(&Value::from("x")).is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

const AND_FAILED: &str = "The value does not satisfy all of the validators.";

/// Combines validators with logical AND.
///
/// `V` is either a tuple of validators sharing one input type (arity 1 to
/// 8) or a `Vec` of validators of one type. Validators run in order on the
/// same input and the first failure stops the run; its reason is wrapped
/// under a summary message. On success the output is an owned copy of the
/// input: the individual outputs are discarded.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let positive = validator(|input: &Value| {
///     number().validate(input).and_then(|n| {
///         if n > 0.0 { Ok(n) } else { Err(ValidationError::new("The number is not positive.")) }
///     })
/// });
///
/// let checks = and(vec![positive.clone(), positive]);
/// assert!(checks.validate(&Value::from(1)).is_ok());
///
/// let reason = checks.validate(&Value::from(-1)).err();
/// assert_eq!(
///     reason.map(|r| r.leaf_messages().join("; ")),
///     Some("The number is not positive.".to_owned())
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<V> {
    pub(crate) validators: V,
}

impl<V> And<V> {
    /// Creates a new `And` combinator.
    pub fn new(validators: V) -> Self {
        Self { validators }
    }

    /// Returns a reference to the wrapped validators.
    pub fn validators(&self) -> &V {
        &self.validators
    }

    /// Extracts the wrapped validators.
    pub fn into_inner(self) -> V {
        self.validators
    }
}

fn failed(cause: ValidationError) -> ValidationError {
    ValidationError::wrapped(AND_FAILED, cause)
}

macro_rules! impl_and_for_tuple {
    ($len:literal; $($name:ident $idx:tt),+) => {
        impl<I, $($name),+> Validate for And<($($name,)+)>
        where
            I: ?Sized + ToOwned,
            $($name: Validate<Input = I>,)+
        {
            type Input = I;
            type Output = I::Owned;

            fn validate(&self, input: &I) -> Result<I::Owned, ValidationError> {
                $(self.validators.$idx.validate(input).map_err(failed)?;)+
                Ok(input.to_owned())
            }
        }
    };
}

for_each_tuple!(impl_and_for_tuple);

impl<V> Validate for And<Vec<V>>
where
    V: Validate,
    V::Input: ToOwned,
{
    type Input = V::Input;
    type Output = <V::Input as ToOwned>::Owned;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        for validator in &self.validators {
            validator.validate(input).map_err(failed)?;
        }
        Ok(input.to_owned())
    }
}

/// Creates an `And` combinator from a tuple or `Vec` of validators.
///
/// See also the [`all_of!`](crate::all_of) macro.
pub fn and<V>(validators: V) -> And<V> {
    And::new(validators)
}

//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator: the first validator that
//! accepts the input wins.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let id = or((string(), number()));
//! assert_eq!(id.validate(&Value::from(7)), Ok(Value::from(7)));
//!
//! let reason = id.validate(&Value::Null).err();
//! assert_eq!(
//!     reason.as_ref().map(|r| r.leaf_messages()),
//!     Some(vec!["The value is not a string.", "The value is not a number."])
//! );
//! ```

use sift_value::Value;

use crate::foundation::{Validate, ValidationError};

const OR_FAILED: &str = "The value does not satisfy any of the validators.";

/// Combines validators with logical OR.
///
/// `V` is either a tuple of validators sharing one input type (arity 1 to
/// 8) or a `Vec` of validators of one type. Validators run left to right
/// and the first success is returned, converted into a [`Value`]. When all
/// of them fail, the reason lists every branch's reason in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<V> {
    pub(crate) validators: V,
}

impl<V> Or<V> {
    /// Creates a new `Or` combinator.
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

macro_rules! impl_or_for_tuple {
    ($len:literal; $($name:ident $idx:tt),+) => {
        impl<I, $($name),+> Validate for Or<($($name,)+)>
        where
            I: ?Sized,
            $(
                $name: Validate<Input = I>,
                <$name as Validate>::Output: Into<Value>,
            )+
        {
            type Input = I;
            type Output = Value;

            fn validate(&self, input: &I) -> Result<Value, ValidationError> {
                let mut reasons = Vec::with_capacity($len);
                $(
                    match self.validators.$idx.validate(input) {
                        Ok(output) => return Ok(output.into()),
                        Err(reason) => reasons.push(reason),
                    }
                )+
                Err(ValidationError::aggregate(OR_FAILED, reasons))
            }
        }
    };
}

for_each_tuple!(impl_or_for_tuple);

impl<V> Validate for Or<Vec<V>>
where
    V: Validate,
    V::Output: Into<Value>,
{
    type Input = V::Input;
    type Output = Value;

    fn validate(&self, input: &Self::Input) -> Result<Value, ValidationError> {
        let mut reasons = Vec::with_capacity(self.validators.len());
        for validator in &self.validators {
            match validator.validate(input) {
                Ok(output) => return Ok(output.into()),
                Err(reason) => reasons.push(reason),
            }
        }
        Err(ValidationError::aggregate(OR_FAILED, reasons))
    }
}

/// Creates an `Or` combinator from a tuple or `Vec` of validators.
///
/// See also the [`any_of!`](crate::any_of) macro.
pub fn or<V>(validators: V) -> Or<V> {
    Or::new(validators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{BoxedValidator, ValidateExt};
    use crate::validators::{boolean, equal, null, number, string, undefined};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_match_wins() {
        let v = or((equal(1), number()));
        assert_eq!(v.validate(&Value::from(1)), Ok(Value::from(1)));
        assert_eq!(v.validate(&Value::from(2)), Ok(Value::from(2)));
    }

    #[test]
    fn test_all_reasons_in_order() {
        let v = or((string(), number(), boolean()));
        assert_eq!(
            v.validate(&Value::Null),
            Err(ValidationError::aggregate(
                OR_FAILED,
                vec![
                    "The value is not a string.".into(),
                    "The value is not a number.".into(),
                    "The value is not a boolean.".into(),
                ]
            ))
        );
    }

    #[test]
    fn test_or_ext_method() {
        let maybe = null().or(undefined());
        assert!(maybe.validate(&Value::Null).is_ok());
        assert!(maybe.validate(&Value::Undefined).is_ok());
        assert!(maybe.validate(&Value::from(0)).is_err());
    }

    #[test]
    fn test_or_over_boxed_vec() {
        let branches: Vec<BoxedValidator<Value, Value>> =
            vec![equal("a").boxed(), equal("b").boxed()];
        let v = or(branches);
        assert!(v.validate(&Value::from("b")).is_ok());
        assert_eq!(v.validate(&Value::from("c")).map_err(|r| r.causes().len()), Err(2));
    }

    #[test]
    fn test_empty_vec_rejects() {
        let none: Or<Vec<crate::validators::IsString>> = or(Vec::new());
        assert_eq!(
            none.validate(&Value::from("x")),
            Err(ValidationError::aggregate(OR_FAILED, vec![]))
        );
    }
}

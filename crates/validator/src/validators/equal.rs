//! Literal validators
//!
//! [`equal`] accepts exactly one value; [`one_of`] and [`loose_one_of`]
//! accept any value from a list. Comparison is strict equality: primitives
//! by value, objects by identity, and `NaN` never matches.

use sift_value::Value;

use crate::foundation::{Validate, ValidationError};

crate::validator! {
    /// Accepts values strictly equal to `expected`.
    ///
    /// ```rust
    /// use sift_validator::prelude::*;
    ///
    /// let admin = equal("admin");
    /// assert!(admin.validate(&Value::from("admin")).is_ok());
    /// assert!(admin.validate(&Value::from("root")).is_err());
    /// ```
    pub Equal { expected: Value } for Value => Value;
    narrow(self, input) { (*input == self.expected).then(|| input.clone()) }
    error(self, input) { format!("The value is not equal to {}.", self.expected) }
    new(expected: impl Into<Value>) { Self { expected: expected.into() } }
    fn equal(expected: impl Into<Value>);
}

/// Accepts values strictly equal to one of a list.
///
/// Behaves like `or` over [`equal`] validators, but fails with a single
/// flat reason listing the allowed values.
#[derive(Debug, Clone)]
pub struct OneOf {
    values: Vec<Value>,
}

impl OneOf {
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the allowed values, in the order given.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    fn reason(&self) -> ValidationError {
        let allowed: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        ValidationError::new(format!(
            "The value is not one of the allowed values: {}.",
            allowed.join(", ")
        ))
    }
}

impl Validate for OneOf {
    type Input = Value;
    type Output = Value;

    fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        if self.values.iter().any(|value| value == input) {
            Ok(input.clone())
        } else {
            Err(self.reason())
        }
    }
}

/// Accepts one of a fixed list of literals.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let level = one_of(["debug", "info", "warn"]);
/// assert!(level.validate(&Value::from("info")).is_ok());
/// assert_eq!(
///     level.validate(&Value::from("trace")).map_err(|e| e.to_string()),
///     Err("The value is not one of the allowed values: \"debug\", \"info\", \"warn\".".to_owned())
/// );
/// ```
#[must_use]
pub fn one_of<T, const N: usize>(values: [T; N]) -> OneOf
where
    T: Into<Value>,
{
    OneOf::new(values)
}

/// Accepts one of a list of values built at runtime.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let ports = loose_one_of((8000..8003).map(Value::from));
/// assert!(ports.validate(&Value::from(8001)).is_ok());
/// assert!(ports.validate(&Value::from(9000)).is_err());
/// ```
#[must_use]
pub fn loose_one_of<I>(values: I) -> OneOf
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    OneOf::new(values)
}

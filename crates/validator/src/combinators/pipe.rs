//! Sequential composition.

use crate::foundation::{Validate, ValidationError};

/// Runs `first`, then feeds its output to `second`.
///
/// Failures of either stage are returned unchanged. This is how the
/// coercing shape validators are built: [`prop`](crate::combinators::prop())
/// is `object()` piped into `strict_prop`.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let letters = array().pipe(strict_array_of(string()));
/// assert!(letters.validate(&Value::array(["a", "b"])).is_ok());
/// assert!(letters.validate(&Value::from("ab")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Pipe<A, B> {
    /// Creates a new `Pipe` combinator.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns a reference to the first stage.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Returns a reference to the second stage.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Extracts both stages.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Rebuilds the second stage, keeping the first.
    pub(crate) fn map_second<C>(self, f: impl FnOnce(B) -> C) -> Pipe<A, C> {
        Pipe::new(self.first, f(self.second))
    }
}

impl<A, B> Validate for Pipe<A, B>
where
    A: Validate,
    B: Validate<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn validate(&self, input: &Self::Input) -> Result<B::Output, ValidationError> {
        let narrowed = self.first.validate(input)?;
        self.second.validate(&narrowed)
    }
}

/// Creates a `Pipe` combinator.
pub fn pipe<A, B>(first: A, second: B) -> Pipe<A, B>
where
    A: Validate,
    B: Validate<Input = A::Output>,
{
    Pipe::new(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::validator;
    use crate::validators::{number, string};
    use sift_value::Value;

    #[test]
    fn test_output_flows_into_second_stage() {
        let length = pipe(string(), validator(|s: &std::sync::Arc<str>| Ok(s.len())));
        assert_eq!(length.validate(&Value::from("abc")), Ok(3));
    }

    #[test]
    fn test_failures_pass_through_unchanged() {
        let positive = validator(|n: &f64| {
            if *n > 0.0 {
                Ok(*n)
            } else {
                Err(ValidationError::new("The number is not positive."))
            }
        });
        let v = pipe(number(), positive);

        assert_eq!(
            v.validate(&Value::from("1")),
            Err(ValidationError::new("The value is not a number."))
        );
        assert_eq!(
            v.validate(&Value::from(-1)),
            Err(ValidationError::new("The number is not positive."))
        );
    }
}

//! Homogeneous array validators

use sift_value::{Array, Value};

use crate::combinators::Pipe;
use crate::foundation::{Validate, ValidationError};
use crate::validators::IsArray;

/// Wraps an element's failure reason with its index.
pub(crate) fn element_error(index: usize, cause: ValidationError) -> ValidationError {
    ValidationError::wrapped(format!("The element at index {index} is invalid."), cause)
}

/// Checks that every element of an array passes one validator.
///
/// Elements are checked in order and the first failure is reported.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let names = array_of(string());
///
/// assert!(names.validate(&Value::array(["a", "b"])).is_ok());
/// assert_eq!(
///     names.validate(&Value::array([Value::from("a"), Value::from(1)])),
///     Err(ValidationError::wrapped(
///         "The element at index 1 is invalid.",
///         "The value is not a string."
///     ))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictArrayOf<V> {
    element: V,
}

impl<V> StrictArrayOf<V> {
    pub fn new(element: V) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &V {
        &self.element
    }
}

impl<V> Validate for StrictArrayOf<V>
where
    V: Validate<Input = Value>,
{
    type Input = Array;
    type Output = Array;

    fn validate(&self, array: &Array) -> Result<Array, ValidationError> {
        for (index, element) in array.iter().enumerate() {
            self.element
                .validate(element)
                .map_err(|cause| element_error(index, cause))?;
        }
        Ok(array.clone())
    }
}

/// Creates a [`StrictArrayOf`] validator.
pub fn strict_array_of<V>(element: V) -> StrictArrayOf<V>
where
    V: Validate<Input = Value>,
{
    StrictArrayOf::new(element)
}

/// Like [`strict_array_of`], but accepts any value and requires it to be an
/// array.
pub fn array_of<V>(element: V) -> Pipe<IsArray, StrictArrayOf<V>>
where
    V: Validate<Input = Value>,
{
    Pipe::new(IsArray, strict_array_of(element))
}

//! Fixed-length array validators

use sift_value::{Array, Value};

use crate::combinators::Pipe;
use crate::combinators::array::element_error;
use crate::foundation::{Validate, ValidationError};
use crate::validators::IsArray;

/// Checks an array of exactly `n` elements, each against its own validator.
///
/// `T` is a tuple of validators (arity 1 to 8). A length mismatch is
/// reported before any element is looked at.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let pair = tuple((string(), number()));
///
/// assert!(pair.validate(&Value::array([Value::from("a"), Value::from(1)])).is_ok());
/// assert_eq!(
///     pair.validate(&Value::array(["a"])),
///     Err(ValidationError::new("The array has 1 element, expected exactly 2."))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictTuple<T> {
    elements: T,
}

impl<T> StrictTuple<T> {
    pub fn new(elements: T) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &T {
        &self.elements
    }
}

fn length_error(actual: usize, expected: usize) -> ValidationError {
    let noun = if actual == 1 { "element" } else { "elements" };
    ValidationError::new(format!(
        "The array has {actual} {noun}, expected exactly {expected}."
    ))
}

macro_rules! impl_tuple_for_tuple {
    ($len:literal; $($name:ident $idx:tt),+) => {
        impl<$($name),+> Validate for StrictTuple<($($name,)+)>
        where
            $($name: Validate<Input = Value>,)+
        {
            type Input = Array;
            type Output = Array;

            fn validate(&self, array: &Array) -> Result<Array, ValidationError> {
                let elements = array.elements();
                if elements.len() != $len {
                    return Err(length_error(elements.len(), $len));
                }
                $(
                    self.elements
                        .$idx
                        .validate(&elements[$idx])
                        .map_err(|cause| element_error($idx, cause))?;
                )+
                Ok(array.clone())
            }
        }
    };
}

for_each_tuple!(impl_tuple_for_tuple);

/// Creates a [`StrictTuple`] validator.
pub fn strict_tuple<T>(elements: T) -> StrictTuple<T> {
    StrictTuple::new(elements)
}

/// Like [`strict_tuple`], but accepts any value and requires it to be an
/// array.
pub fn tuple<T>(elements: T) -> Pipe<IsArray, StrictTuple<T>> {
    Pipe::new(IsArray, strict_tuple(elements))
}

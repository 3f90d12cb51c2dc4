//! Single-property validators
//!
//! [`strict_prop`] checks one property of an object; [`prop`] first checks
//! the input is an object, and [`loose_prop`] first converts it to one.

use serde::{Deserialize, Serialize};
use sift_value::{Object, PropertyKey, Value};

use crate::combinators::Pipe;
use crate::foundation::{Validate, ValidationError};
use crate::validators::{IsObject, ToObject};

/// Options for the property validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropOptions {
    /// Only own properties count. When false, inherited properties count too.
    pub own: bool,
    /// A missing property is accepted.
    pub partial: bool,
}

impl Default for PropOptions {
    fn default() -> Self {
        Self {
            own: true,
            partial: false,
        }
    }
}

/// Looks up `key` on `object` and runs `validator` on its value.
///
/// Shared by [`StrictProp`] and the multi-property validators.
pub(crate) fn check_property<V>(
    object: &Object,
    key: &PropertyKey,
    validator: &V,
    own: bool,
    partial: bool,
) -> Result<(), ValidationError>
where
    V: Validate<Input = Value> + ?Sized,
{
    let value = if own {
        object.get_own(key)
    } else {
        object.get(key)
    };

    match value {
        None if partial => Ok(()),
        None => Err(ValidationError::new(format!(
            "The property \"{key}\" is missing."
        ))),
        Some(value) => validator.validate(&value).map(drop).map_err(|cause| {
            ValidationError::wrapped(format!("The property \"{key}\" is invalid."), cause)
        }),
    }
}

/// Checks one property of an object.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let named = strict_prop("name", string());
/// let user = Object::builder().property("name", 1).build();
///
/// assert_eq!(
///     named.validate(&user),
///     Err(ValidationError::wrapped(
///         "The property \"name\" is invalid.",
///         "The value is not a string."
///     ))
/// );
/// assert_eq!(
///     named.validate(&Object::new()),
///     Err(ValidationError::new("The property \"name\" is missing."))
/// );
/// assert!(named.partial().validate(&Object::new()).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct StrictProp<V> {
    key: PropertyKey,
    validator: V,
    options: PropOptions,
}

impl<V> StrictProp<V> {
    pub fn new(key: impl Into<PropertyKey>, validator: V) -> Self {
        Self {
            key: key.into(),
            validator,
            options: PropOptions::default(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: PropOptions) -> Self {
        self.options = options;
        self
    }

    /// Accepts objects without the property.
    #[must_use = "builder methods must be chained or built"]
    pub fn partial(mut self) -> Self {
        self.options.partial = true;
        self
    }

    /// Looks the property up through the prototype chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn inherited(mut self) -> Self {
        self.options.own = false;
        self
    }

    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn options(&self) -> PropOptions {
        self.options
    }
}

impl<V> Validate for StrictProp<V>
where
    V: Validate<Input = Value>,
{
    type Input = Object;
    type Output = Object;

    fn validate(&self, object: &Object) -> Result<Object, ValidationError> {
        check_property(
            object,
            &self.key,
            &self.validator,
            self.options.own,
            self.options.partial,
        )?;
        Ok(object.clone())
    }
}

/// Creates a [`StrictProp`] validator.
pub fn strict_prop<V>(key: impl Into<PropertyKey>, validator: V) -> StrictProp<V>
where
    V: Validate<Input = Value>,
{
    StrictProp::new(key, validator)
}

/// Like [`strict_prop`], but accepts any value and requires it to be an
/// object.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// assert_eq!(
///     prop("length", number()).validate(&Value::from("abc")),
///     Err(ValidationError::new("The value is not an object."))
/// );
/// ```
pub fn prop<V>(key: impl Into<PropertyKey>, validator: V) -> Pipe<IsObject, StrictProp<V>>
where
    V: Validate<Input = Value>,
{
    Pipe::new(IsObject, strict_prop(key, validator))
}

/// Like [`strict_prop`], but accepts any value and converts it to an object
/// first, so properties of primitives can be checked.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let sized = loose_prop("length", number());
/// assert!(sized.validate(&Value::from("abc")).is_ok());
/// assert!(sized.validate(&Value::from(3)).is_err());
/// ```
pub fn loose_prop<V>(key: impl Into<PropertyKey>, validator: V) -> Pipe<ToObject, StrictProp<V>>
where
    V: Validate<Input = Value>,
{
    Pipe::new(ToObject, strict_prop(key, validator))
}

impl<C, V> Pipe<C, StrictProp<V>> {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(self, options: PropOptions) -> Self {
        self.map_second(|prop| prop.with_options(options))
    }

    /// Accepts objects without the property.
    #[must_use = "builder methods must be chained or built"]
    pub fn partial(self) -> Self {
        self.map_second(StrictProp::partial)
    }

    /// Looks the property up through the prototype chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn inherited(self) -> Self {
        self.map_second(StrictProp::inherited)
    }
}

//! Property key validators.

use serde::{Deserialize, Serialize};
use sift_value::{Object, PropertyKey, Value};

use crate::combinators::Pipe;
use crate::foundation::{Validate, ValidationError};

crate::validator! {
    /// Accepts values that can name a property: strings, numbers (in their
    /// canonical string form) and symbols.
    pub IsPropertyKey for Value => PropertyKey;
    narrow(input) { input.to_property_key() }
    error(input) { "The value is not a valid property key." }
    fn property_key();
}

/// Options for [`strict_key_of`] and [`key_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyOfOptions {
    /// Only own properties count. When false, inherited properties count too.
    pub own: bool,
}

impl Default for KeyOfOptions {
    fn default() -> Self {
        Self { own: true }
    }
}

/// Accepts keys that name a property of an object.
#[derive(Debug, Clone)]
pub struct StrictKeyOf {
    object: Object,
    options: KeyOfOptions,
}

impl StrictKeyOf {
    pub fn new(object: Object) -> Self {
        Self {
            object,
            options: KeyOfOptions::default(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: KeyOfOptions) -> Self {
        self.options = options;
        self
    }

    /// Counts inherited properties too.
    #[must_use = "builder methods must be chained or built"]
    pub fn inherited(self) -> Self {
        self.with_options(KeyOfOptions { own: false })
    }

    #[must_use]
    pub fn options(&self) -> KeyOfOptions {
        self.options
    }
}

impl Validate for StrictKeyOf {
    type Input = PropertyKey;
    type Output = PropertyKey;

    fn validate(&self, key: &PropertyKey) -> Result<PropertyKey, ValidationError> {
        let present = if self.options.own {
            self.object.has_own(key)
        } else {
            self.object.has(key)
        };

        if present {
            Ok(key.clone())
        } else {
            Err(ValidationError::new(format!(
                "The key \"{key}\" is not a property of the object."
            )))
        }
    }
}

/// Accepts property keys of `object`.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let config = Object::builder().property("port", 80).build();
/// let field = strict_key_of(&config);
///
/// assert!(field.validate(&PropertyKey::from("port")).is_ok());
/// assert!(field.validate(&PropertyKey::from("host")).is_err());
/// ```
#[must_use]
pub fn strict_key_of(object: &Object) -> StrictKeyOf {
    StrictKeyOf::new(object.clone())
}

/// Like [`strict_key_of`], but accepts any value and checks it is a
/// property key first.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let tuple = Array::new(["a", "b"]).into_object();
/// assert!(key_of(&tuple).validate(&Value::from(1)).is_ok());
/// assert!(key_of(&tuple).validate(&Value::from(2)).is_err());
/// assert!(key_of(&tuple).validate(&Value::Null).is_err());
/// ```
#[must_use]
pub fn key_of(object: &Object) -> Pipe<IsPropertyKey, StrictKeyOf> {
    Pipe::new(IsPropertyKey, strict_key_of(object))
}

impl Pipe<IsPropertyKey, StrictKeyOf> {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(self, options: KeyOfOptions) -> Self {
        self.map_second(|keys| keys.with_options(options))
    }

    /// Counts inherited properties too.
    #[must_use = "builder methods must be chained or built"]
    pub fn inherited(self) -> Self {
        self.map_second(StrictKeyOf::inherited)
    }
}

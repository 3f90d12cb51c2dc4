//! Multi-property validators
//!
//! A [`Props`] definition lists the properties an object must have, each
//! with its own validator. [`strict_props`] checks an object against it;
//! [`props`] and [`loose_props`] accept any value, checking or converting it
//! to an object first.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sift_value::{Object, PropertyKey, Value};
use smallvec::SmallVec;

use crate::combinators::Pipe;
use crate::combinators::prop::check_property;
use crate::foundation::{Validate, ValidationError};
use crate::validators::{IsObject, ToObject};

/// Number of unexpected keys named in the report before summarising.
const REPORTED_EXTRA_KEYS: usize = 3;

/// Options for the multi-property validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropsOptions {
    /// Only own properties count. When false, inherited properties count too.
    pub own: bool,
    /// Every property may be missing.
    pub partial: bool,
    /// Own enumerable properties that are not defined are accepted.
    pub allow_extra: bool,
}

impl Default for PropsOptions {
    fn default() -> Self {
        Self {
            own: true,
            partial: false,
            allow_extra: true,
        }
    }
}

// ============================================================================
// DEFINITIONS
// ============================================================================

type FieldValidator = Arc<dyn Validate<Input = Value, Output = ()> + Send + Sync>;

/// Drops a validator's output so that fields of different types can be
/// stored together.
struct Discard<V>(V);

impl<V: Validate<Input = Value>> Validate for Discard<V> {
    type Input = Value;
    type Output = ();

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        self.0.validate(input).map(drop)
    }
}

#[derive(Clone)]
struct Field {
    key: PropertyKey,
    optional: bool,
    validator: FieldValidator,
}

/// Property definitions plus [`PropsOptions`].
///
/// Fields are checked in the order they are added.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let user = Props::new()
///     .field("name", string())
///     .optional_field("email", string())
///     .deny_extra();
///
/// assert_eq!(user.keys().count(), 2);
/// assert!(!user.options().allow_extra);
/// ```
#[derive(Clone, Default)]
pub struct Props {
    fields: Vec<Field>,
    options: PropsOptions,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required property.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(self, key: impl Into<PropertyKey>, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.push(key.into(), false, validator)
    }

    /// Adds a property that may be missing.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional_field<V>(self, key: impl Into<PropertyKey>, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.push(key.into(), true, validator)
    }

    fn push<V>(mut self, key: PropertyKey, optional: bool, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.fields.push(Field {
            key,
            optional,
            validator: Arc::new(Discard(validator)),
        });
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: PropsOptions) -> Self {
        self.options = options;
        self
    }

    /// Makes every property optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn partial(mut self) -> Self {
        self.options.partial = true;
        self
    }

    /// Looks properties up through the prototype chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn inherited(mut self) -> Self {
        self.options.own = false;
        self
    }

    /// Rejects objects with own enumerable properties that are not defined.
    #[must_use = "builder methods must be chained or built"]
    pub fn deny_extra(mut self) -> Self {
        self.options.allow_extra = false;
        self
    }

    /// Returns the defined keys, in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.fields.iter().map(|field| &field.key)
    }

    pub fn options(&self) -> PropsOptions {
        self.options
    }

    fn defines(&self, key: &PropertyKey) -> bool {
        self.fields.iter().any(|field| field.key == *key)
    }

    fn check_extra(&self, object: &Object) -> Result<(), ValidationError> {
        let mut named: SmallVec<[String; REPORTED_EXTRA_KEYS]> = SmallVec::new();
        let mut remaining = 0_usize;

        for key in object.own_keys() {
            if self.defines(&key) {
                continue;
            }
            if named.len() < REPORTED_EXTRA_KEYS {
                named.push(format!("\"{key}\""));
            } else {
                remaining += 1;
            }
        }

        if named.is_empty() {
            return Ok(());
        }

        let mut message = format!("The object has unexpected properties: {}", named.join(", "));
        if remaining > 0 {
            message.push_str(&format!(" and {remaining} more"));
        }
        message.push('.');
        Err(ValidationError::new(message))
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("options", &self.options)
            .finish()
    }
}

// ============================================================================
// VALIDATORS
// ============================================================================

/// Checks an object against a [`Props`] definition.
///
/// Each defined property is checked in order with the same rules as
/// [`strict_prop`](crate::combinators::strict_prop); the first failure is
/// returned. Unexpected properties are only looked for once every defined
/// property has passed.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let point = strict_props(
///     Props::new().field("x", number()).field("y", number()).deny_extra(),
/// );
///
/// let ok = Object::builder().property("x", 1).property("y", 2).build();
/// let extra = Object::builder()
///     .property("x", 1)
///     .property("y", 2)
///     .property("z", 3)
///     .build();
///
/// assert!(point.validate(&ok).is_ok());
/// assert_eq!(
///     point.validate(&extra),
///     Err(ValidationError::new("The object has unexpected properties: \"z\"."))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StrictProps {
    props: Props,
}

impl StrictProps {
    pub fn new(props: Props) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    fn map_props(self, f: impl FnOnce(Props) -> Props) -> Self {
        Self::new(f(self.props))
    }
}

impl Validate for StrictProps {
    type Input = Object;
    type Output = Object;

    fn validate(&self, object: &Object) -> Result<Object, ValidationError> {
        let options = self.props.options;

        for field in &self.props.fields {
            check_property(
                object,
                &field.key,
                field.validator.as_ref(),
                options.own,
                options.partial || field.optional,
            )?;
        }

        if !options.allow_extra {
            self.props.check_extra(object)?;
        }

        Ok(object.clone())
    }
}

/// Creates a [`StrictProps`] validator.
pub fn strict_props(props: Props) -> StrictProps {
    StrictProps::new(props)
}

/// Like [`strict_props`], but accepts any value and requires it to be an
/// object.
pub fn props(props: Props) -> Pipe<IsObject, StrictProps> {
    Pipe::new(IsObject, strict_props(props))
}

/// Like [`strict_props`], but accepts any value and converts it to an
/// object first.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let sized = loose_props(Props::new().field("length", number()));
/// assert!(sized.validate(&Value::from("abc")).is_ok());
/// assert!(sized.validate(&Value::array([1, 2])).is_ok());
/// assert!(sized.validate(&Value::from(true)).is_err());
/// ```
pub fn loose_props(props: Props) -> Pipe<ToObject, StrictProps> {
    Pipe::new(ToObject, strict_props(props))
}

impl<C> Pipe<C, StrictProps> {
    /// Adds a required property.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(self, key: impl Into<PropertyKey>, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.map_second(|strict| strict.map_props(|props| props.field(key, validator)))
    }

    /// Adds a property that may be missing.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional_field<V>(self, key: impl Into<PropertyKey>, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.map_second(|strict| strict.map_props(|props| props.optional_field(key, validator)))
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(self, options: PropsOptions) -> Self {
        self.map_second(|strict| strict.map_props(|props| props.with_options(options)))
    }

    /// Makes every property optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn partial(self) -> Self {
        self.map_second(|strict| strict.map_props(Props::partial))
    }

    /// Looks properties up through the prototype chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn inherited(self) -> Self {
        self.map_second(|strict| strict.map_props(Props::inherited))
    }

    /// Rejects objects with own enumerable properties that are not defined.
    #[must_use = "builder methods must be chained or built"]
    pub fn deny_extra(self) -> Self {
        self.map_second(|strict| strict.map_props(Props::deny_extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{number, string};
    use pretty_assertions::assert_eq;
    use sift_value::Symbol;

    fn foo_bar() -> Props {
        Props::new().field("foo", string()).field("bar", number())
    }

    #[test]
    fn test_fields_checked_in_order() {
        let v = strict_props(foo_bar());
        let both_bad = Object::builder()
            .property("bar", "x")
            .property("foo", 0)
            .build();

        assert_eq!(
            v.validate(&both_bad),
            Err(ValidationError::wrapped(
                "The property \"foo\" is invalid.",
                "The value is not a string."
            ))
        );
    }

    #[test]
    fn test_optional_field_and_partial() {
        let v = strict_props(Props::new().field("a", number()).optional_field("b", number()));
        let only_a = Object::builder().property("a", 1).build();

        assert!(v.validate(&only_a).is_ok());
        assert_eq!(
            v.validate(&Object::new()),
            Err(ValidationError::new("The property \"a\" is missing."))
        );
        assert!(
            strict_props(foo_bar().partial())
                .validate(&Object::new())
                .is_ok()
        );
    }

    #[test]
    fn test_extra_keys_report_is_capped() {
        let v = strict_props(Props::new().field("id", number()).deny_extra());
        let object = Object::builder()
            .property("id", 1)
            .property("a", 1)
            .property("b", 1)
            .property("c", 1)
            .property("d", 1)
            .property(Symbol::new("e"), 1)
            .build();

        assert_eq!(
            v.validate(&object),
            Err(ValidationError::new(
                "The object has unexpected properties: \"a\", \"b\", \"c\" and 2 more."
            ))
        );
    }

    #[test]
    fn test_extra_keys_checked_after_fields() {
        let v = strict_props(foo_bar().deny_extra());
        let object = Object::builder()
            .property("foo", 0)
            .property("bar", 0)
            .property("baz", 0)
            .build();

        assert_eq!(
            v.validate(&object).map_err(|r| r.message().map(str::to_owned)),
            Err(Some("The property \"foo\" is invalid.".to_owned()))
        );
    }

    #[test]
    fn test_extra_allowed_by_default() {
        let v = props(foo_bar());
        let object = Object::builder()
            .property("foo", "")
            .property("bar", 0)
            .property("baz", true)
            .build();

        assert!(v.validate(&Value::from(object)).is_ok());
    }

    #[test]
    fn test_builder_on_coercing_variant() {
        let v = props(Props::new())
            .field("foo", string())
            .optional_field("bar", number())
            .deny_extra();
        let object = Object::builder().property("foo", "x").build();

        assert!(v.validate(&Value::from(object)).is_ok());
        assert!(v.validate(&Value::from("x")).is_err());
    }

    #[test]
    fn test_inherited_fields() {
        let parent = Object::builder().property("id", 1).build();
        let child = Object::builder().prototype(parent).build();

        let own_only = strict_props(Props::new().field("id", number()));
        assert_eq!(
            own_only.validate(&child),
            Err(ValidationError::new("The property \"id\" is missing."))
        );
        assert!(
            strict_props(Props::new().field("id", number()).inherited())
                .validate(&child)
                .is_ok()
        );
        assert!(
            strict_props(Props::new().field("id", number()).with_options(PropsOptions {
                own: false,
                ..PropsOptions::default()
            }))
            .validate(&child)
            .is_ok()
        );

        let piped = props(Props::new()).field("id", number());
        assert!(piped.validate(&Value::from(child.clone())).is_err());
        assert!(
            piped
                .inherited()
                .deny_extra()
                .validate(&Value::from(child))
                .is_ok()
        );
    }

    #[test]
    fn test_options_from_config() {
        let options: PropsOptions =
            serde_json::from_str(r#"{ "allowExtra": false, "own": false }"#).unwrap_or_default();
        assert_eq!(
            options,
            PropsOptions {
                own: false,
                partial: false,
                allow_extra: false
            }
        );
    }
}

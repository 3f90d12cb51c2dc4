//! The unified dynamic value.

use std::sync::Arc;

use crate::key::PropertyKey;
use crate::kind::ValueKind;
use crate::object::{Array, Function, Object, ObjectKind, Primitive};
use crate::symbol::Symbol;

/// Any value a validator can be handed.
///
/// Primitives are stored inline; objects (including arrays and functions)
/// are shared handles with identity.
///
/// Equality is strict equality: primitives compare by value (`NaN` is not
/// equal to itself, `0.0 == -0.0`) and objects compare by identity.
///
/// ```rust
/// use sift_value::{Array, Value};
///
/// assert_eq!(Value::from("a"), Value::from("a"));
/// assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
///
/// let array = Value::from(Array::new([1, 2]));
/// assert_eq!(array, array.clone());
/// assert_ne!(array, Value::from(Array::new([1, 2])));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Undefined,
    /// The intentional empty value.
    Null,
    Boolean(bool),
    Number(f64),
    /// An arbitrary-size integer, bounded here to 128 bits.
    BigInt(i128),
    String(Arc<str>),
    Symbol(Symbol),
    /// Any object, including arrays, functions and boxed primitives.
    Object(Object),
}

impl Value {
    // ==================== Constructors ====================

    /// Creates a string value.
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::String(s.into())
    }

    /// Creates an array value.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Object(Array::new(items).into_object())
    }

    // ==================== Type queries ====================

    /// Returns the `typeof` classification.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Object,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::BigInt(_) => ValueKind::BigInt,
            Self::String(_) => ValueKind::String,
            Self::Symbol(_) => ValueKind::Symbol,
            Self::Object(object) if object.is_function() => ValueKind::Function,
            Self::Object(_) => ValueKind::Object,
        }
    }

    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for `null` and `undefined`.
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Returns true for every object, including arrays and functions.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Object(object) if object.is_array())
    }

    #[must_use]
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Object(object) if object.is_function())
    }

    /// Returns true for everything that is not an object.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        !self.is_object()
    }

    // ==================== Accessors ====================

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bigint(&self) -> Option<i128> {
        match self {
            Self::BigInt(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the shared string, if this is a string.
    #[must_use]
    pub fn as_string(&self) -> Option<&Arc<str>> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<Array> {
        self.as_object().and_then(Object::as_array)
    }

    #[must_use]
    pub fn as_function(&self) -> Option<Function> {
        self.as_object().and_then(Object::as_function)
    }

    // ==================== Coercions ====================

    /// Converts the value to an object.
    ///
    /// Objects are returned as-is, primitives are boxed, and `null` /
    /// `undefined` become a fresh empty object.
    ///
    /// ```rust
    /// use sift_value::{PropertyKey, Value};
    ///
    /// let boxed = Value::from("abc").to_object();
    /// assert!(boxed.has_own(&PropertyKey::from("length")));
    /// ```
    #[must_use]
    pub fn to_object(&self) -> Object {
        let primitive = match self {
            Self::Object(object) => return object.clone(),
            Self::Undefined | Self::Null => return Object::new(),
            Self::Boolean(b) => Primitive::Boolean(*b),
            Self::Number(n) => Primitive::Number(*n),
            Self::BigInt(n) => Primitive::BigInt(*n),
            Self::String(s) => Primitive::String(s.clone()),
            Self::Symbol(s) => Primitive::Symbol(s.clone()),
        };
        Object::boxed(primitive)
    }

    /// Converts the value to a property key, if it can name one.
    ///
    /// Only strings, numbers and symbols are accepted; numbers use their
    /// canonical string form.
    #[must_use]
    pub fn to_property_key(&self) -> Option<PropertyKey> {
        match self {
            Self::String(s) => Some(PropertyKey::String(s.clone())),
            Self::Number(n) => Some(PropertyKey::from_number(*n)),
            Self::Symbol(s) => Some(PropertyKey::Symbol(s.clone())),
            _ => None,
        }
    }

    /// Returns the internal object kind, if this is an object.
    #[must_use]
    pub fn object_kind(&self) -> Option<&ObjectKind> {
        self.as_object().map(Object::kind)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

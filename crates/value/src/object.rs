//! Objects and their specialised handles.
//!
//! An [`Object`] is an immutable, reference-counted handle. Cloning it is
//! cheap and clones compare equal; two separately built objects never do,
//! regardless of their contents.
//!
//! Arrays, functions and boxed primitives are objects with an internal
//! [`ObjectKind`] slot. The slot contributes own properties that are not
//! stored in the property map:
//!
//! | kind | own slot properties | enumerable |
//! |------|---------------------|------------|
//! | `Array` | `"0"`..`"n-1"`, `"length"` | indices only |
//! | `Function` | `"name"`, `"length"` | none |
//! | `Boxed(String)` | `"0"`..`"n-1"` (characters), `"length"` | indices only |

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::class::Class;
use crate::key::PropertyKey;
use crate::symbol::Symbol;
use crate::value::Value;

// ============================================================================
// PRIMITIVE / KIND
// ============================================================================

/// A primitive that can be held inside a boxed object.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    String(Arc<str>),
    Number(f64),
    Boolean(bool),
    BigInt(i128),
    Symbol(Symbol),
}

impl Primitive {
    /// Unboxes into a plain value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Number(n) => Value::Number(*n),
            Self::Boolean(b) => Value::Boolean(*b),
            Self::BigInt(n) => Value::BigInt(*n),
            Self::Symbol(s) => Value::Symbol(s.clone()),
        }
    }

    /// Name of the wrapper type (`"String"`, `"Number"`, ...).
    #[must_use]
    pub const fn wrapper_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Number(_) => "Number",
            Self::Boolean(_) => "Boolean",
            Self::BigInt(_) => "BigInt",
            Self::Symbol(_) => "Symbol",
        }
    }
}

/// Internal slot that determines what kind of object a handle is.
#[derive(Debug, Clone, Default)]
pub enum ObjectKind {
    /// A plain object.
    #[default]
    Ordinary,
    /// An array with its elements.
    Array(Vec<Value>),
    /// A callable object.
    Function { name: Arc<str>, arity: u32 },
    /// The object wrapper of a primitive.
    Boxed(Primitive),
}

// ============================================================================
// OBJECT
// ============================================================================

/// An immutable object handle with identity.
#[derive(Clone)]
pub struct Object(Arc<ObjectData>);

#[derive(Debug, Default)]
struct ObjectData {
    kind: ObjectKind,
    properties: IndexMap<PropertyKey, Value>,
    prototype: Option<Object>,
    class: Option<Class>,
}

impl Object {
    /// Creates an empty ordinary object.
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(ObjectData::default()))
    }

    /// Starts building an ordinary object.
    #[must_use]
    pub fn builder() -> ObjectBuilder {
        ObjectBuilder::new()
    }

    /// Creates the boxed form of a primitive.
    #[must_use]
    pub fn boxed(primitive: Primitive) -> Self {
        ObjectBuilder::with_kind(ObjectKind::Boxed(primitive)).build()
    }

    /// Returns the internal kind.
    #[must_use]
    pub fn kind(&self) -> &ObjectKind {
        &self.0.kind
    }

    /// Returns true for arrays.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.0.kind, ObjectKind::Array(_))
    }

    /// Returns true for callable objects.
    #[must_use]
    pub fn is_function(&self) -> bool {
        matches!(self.0.kind, ObjectKind::Function { .. })
    }

    /// Returns the boxed primitive, if this is a wrapper object.
    #[must_use]
    pub fn boxed_primitive(&self) -> Option<&Primitive> {
        match &self.0.kind {
            ObjectKind::Boxed(primitive) => Some(primitive),
            _ => None,
        }
    }

    /// Returns an array handle if this object is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<Array> {
        Array::from_object(self.clone())
    }

    /// Returns a function handle if this object is callable.
    #[must_use]
    pub fn as_function(&self) -> Option<Function> {
        Function::from_object(self.clone())
    }

    /// Returns the prototype, if any.
    #[must_use]
    pub fn prototype(&self) -> Option<&Self> {
        self.0.prototype.as_ref()
    }

    /// Returns the class tag, if any.
    #[must_use]
    pub fn class(&self) -> Option<&Class> {
        self.0.class.as_ref()
    }

    /// Returns true if the object or anything on its prototype chain is
    /// tagged with `class` or one of its subclasses.
    #[must_use]
    pub fn instance_of(&self, class: &Class) -> bool {
        self.chain()
            .any(|object| object.class().is_some_and(|c| c.is_subclass_of(class)))
    }

    /// Looks up an own property, including internal slot properties.
    #[must_use]
    pub fn get_own(&self, key: &PropertyKey) -> Option<Value> {
        self.slot(key)
            .or_else(|| self.0.properties.get(key).cloned())
    }

    /// Returns true if `key` is an own property.
    #[must_use]
    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.slot(key).is_some() || self.0.properties.contains_key(key)
    }

    /// Looks up a property on the object or its prototype chain.
    #[must_use]
    pub fn get(&self, key: &PropertyKey) -> Option<Value> {
        self.chain().find_map(|object| object.get_own(key))
    }

    /// Returns true if `key` is an own or inherited property.
    #[must_use]
    pub fn has(&self, key: &PropertyKey) -> bool {
        self.chain().any(|object| object.has_own(key))
    }

    /// Returns the enumerable own keys in enumeration order: integer keys
    /// ascending, then string keys in insertion order, then symbol keys in
    /// insertion order.
    #[must_use]
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        let mut indices: Vec<usize> = (0..self.indexed_len()).collect();
        let mut strings = Vec::new();
        let mut symbols = Vec::new();

        for key in self.0.properties.keys() {
            match key {
                PropertyKey::Symbol(_) => symbols.push(key.clone()),
                PropertyKey::String(_) => match key.array_index() {
                    Some(index) => indices.push(index),
                    None => strings.push(key.clone()),
                },
            }
        }

        indices.sort_unstable();
        indices.dedup();

        indices
            .into_iter()
            .map(PropertyKey::from)
            .chain(strings)
            .chain(symbols)
            .collect()
    }

    /// Returns true if both handles refer to the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Tag used when rendering the object (`Object`, `Array`, class name...).
    #[must_use]
    pub fn tag(&self) -> &str {
        match &self.0.kind {
            ObjectKind::Array(_) => "Array",
            ObjectKind::Function { .. } => "Function",
            ObjectKind::Boxed(primitive) => primitive.wrapper_name(),
            ObjectKind::Ordinary => self.class().map_or("Object", Class::name),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |object| object.prototype())
    }

    fn indexed_len(&self) -> usize {
        match &self.0.kind {
            ObjectKind::Array(items) => items.len(),
            ObjectKind::Boxed(Primitive::String(s)) => s.chars().count(),
            _ => 0,
        }
    }

    fn slot(&self, key: &PropertyKey) -> Option<Value> {
        let name = key.as_str()?;
        match &self.0.kind {
            ObjectKind::Ordinary => None,
            ObjectKind::Array(items) => match name {
                "length" => Some(Value::Number(items.len() as f64)),
                _ => items.get(key.array_index()?).cloned(),
            },
            ObjectKind::Function { name: fn_name, arity } => match name {
                "name" => Some(Value::String(fn_name.clone())),
                "length" => Some(Value::Number(f64::from(*arity))),
                _ => None,
            },
            ObjectKind::Boxed(Primitive::String(s)) => match name {
                "length" => Some(Value::Number(s.chars().count() as f64)),
                _ => s
                    .chars()
                    .nth(key.array_index()?)
                    .map(|c| Value::String(c.to_string().into())),
            },
            ObjectKind::Boxed(_) => None,
        }
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("kind", &self.0.kind)
            .field("properties", &self.0.properties)
            .field("class", &self.0.class)
            .field("has_prototype", &self.0.prototype.is_some())
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builds an [`Object`].
///
/// ```rust
/// use sift_value::{Class, Object, PropertyKey, Symbol};
///
/// let point = Class::new("Point");
/// let tag = Symbol::new("tag");
/// let object = Object::builder()
///     .property("x", 1)
///     .property(tag.clone(), true)
///     .class(point.clone())
///     .build();
///
/// assert!(object.instance_of(&point));
/// assert!(object.has_own(&PropertyKey::from(tag)));
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until `build` is called"]
pub struct ObjectBuilder {
    data: ObjectData,
}

impl ObjectBuilder {
    /// Creates a builder for an ordinary object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for an object with the given internal kind.
    pub fn with_kind(kind: ObjectKind) -> Self {
        Self {
            data: ObjectData {
                kind,
                ..ObjectData::default()
            },
        }
    }

    /// Creates a builder for an array.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::with_kind(ObjectKind::Array(items.into_iter().map(Into::into).collect()))
    }

    /// Creates a builder for a function object.
    pub fn function(name: impl Into<Arc<str>>, arity: u32) -> Self {
        Self::with_kind(ObjectKind::Function {
            name: name.into(),
            arity,
        })
    }

    /// Adds (or replaces) an own property.
    pub fn property(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.data.properties.insert(key.into(), value.into());
        self
    }

    /// Sets the prototype that supplies inherited properties.
    pub fn prototype(mut self, prototype: Object) -> Self {
        self.data.prototype = Some(prototype);
        self
    }

    /// Tags the object with a class.
    pub fn class(mut self, class: Class) -> Self {
        self.data.class = Some(class);
        self
    }

    /// Finishes the object.
    pub fn build(self) -> Object {
        Object(Arc::new(self.data))
    }
}

// ============================================================================
// ARRAY / FUNCTION HANDLES
// ============================================================================

/// An object known to be an array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array(Object);

impl Array {
    /// Creates a new array.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self(ObjectBuilder::array(items).build())
    }

    /// Wraps `object` if it is an array.
    #[must_use]
    pub fn from_object(object: Object) -> Option<Self> {
        object.is_array().then_some(Self(object))
    }

    /// Returns the elements.
    #[must_use]
    pub fn elements(&self) -> &[Value] {
        match self.0.kind() {
            ObjectKind::Array(items) => items,
            _ => &[],
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements().len()
    }

    /// Returns true if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements().get(index)
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements().iter()
    }

    /// Returns the underlying object.
    #[must_use]
    pub fn as_object(&self) -> &Object {
        &self.0
    }

    /// Consumes the handle and returns the underlying object.
    #[must_use]
    pub fn into_object(self) -> Object {
        self.0
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new(Vec::<Value>::new())
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An object known to be callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function(Object);

impl Function {
    /// Creates a new function object.
    pub fn new(name: impl Into<Arc<str>>, arity: u32) -> Self {
        Self(ObjectBuilder::function(name, arity).build())
    }

    /// Wraps `object` if it is callable.
    #[must_use]
    pub fn from_object(object: Object) -> Option<Self> {
        object.is_function().then_some(Self(object))
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.0.kind() {
            ObjectKind::Function { name, .. } => name,
            _ => "",
        }
    }

    /// Returns the declared number of parameters.
    #[must_use]
    pub fn arity(&self) -> u32 {
        match self.0.kind() {
            ObjectKind::Function { arity, .. } => *arity,
            _ => 0,
        }
    }

    /// Returns the underlying object.
    #[must_use]
    pub fn as_object(&self) -> &Object {
        &self.0
    }

    /// Consumes the handle and returns the underlying object.
    #[must_use]
    pub fn into_object(self) -> Object {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(s: &str) -> PropertyKey {
        PropertyKey::from(s)
    }

    #[test]
    fn identity() {
        let a = Object::new();
        let b = Object::new();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn own_and_inherited() {
        let proto = Object::builder().property("inherited", 1).build();
        let object = Object::builder()
            .property("own", 2)
            .prototype(proto)
            .build();

        assert!(object.has_own(&key("own")));
        assert!(!object.has_own(&key("inherited")));
        assert!(object.has(&key("inherited")));
        assert_eq!(object.get(&key("inherited")), Some(Value::Number(1.0)));
        assert_eq!(object.get(&key("missing")), None);
    }

    #[test]
    fn undefined_valued_property_is_present() {
        let object = Object::builder().property("x", Value::Undefined).build();
        assert!(object.has_own(&key("x")));
    }

    #[test]
    fn array_slots() {
        let array = Array::new(["a", "b"]);
        let object = array.as_object();

        assert!(object.has_own(&key("0")));
        assert!(object.has_own(&key("length")));
        assert!(!object.has_own(&key("2")));
        assert_eq!(object.get_own(&key("length")), Some(Value::Number(2.0)));
        assert_eq!(object.own_keys(), vec![key("0"), key("1")]);
    }

    #[test]
    fn function_slots() {
        let function = Function::new("handler", 2);
        let object = function.as_object();

        assert_eq!(object.get_own(&key("name")), Some(Value::from("handler")));
        assert_eq!(object.get_own(&key("length")), Some(Value::Number(2.0)));
        assert!(object.own_keys().is_empty());
    }

    #[test]
    fn boxed_string_slots() {
        let object = Object::boxed(Primitive::String("héllo".into()));

        assert_eq!(object.get_own(&key("length")), Some(Value::Number(5.0)));
        assert_eq!(object.get_own(&key("1")), Some(Value::from("é")));
        assert_eq!(object.own_keys().len(), 5);
    }

    #[test]
    fn empty_boxed_string_has_length() {
        let object = Object::boxed(Primitive::String("".into()));
        assert_eq!(object.get_own(&key("length")), Some(Value::Number(0.0)));
        assert!(object.own_keys().is_empty());
    }

    #[test]
    fn boxed_number_has_no_own_properties() {
        let object = Object::boxed(Primitive::Number(1.0));
        assert!(!object.has_own(&key("length")));
        assert!(object.own_keys().is_empty());
    }

    #[test]
    fn enumeration_order() {
        let sym = Symbol::new("s");
        let object = Object::builder()
            .property("b", 1)
            .property(sym.clone(), 2)
            .property("2", 3)
            .property("a", 4)
            .property("1", 5)
            .build();

        assert_eq!(
            object.own_keys(),
            vec![
                key("1"),
                key("2"),
                key("b"),
                key("a"),
                PropertyKey::from(sym)
            ]
        );
    }

    #[test]
    fn instance_of_walks_classes_and_prototypes() {
        let animal = Class::new("Animal");
        let dog = Class::extends("Dog", &animal);
        let rex = Object::builder().class(dog.clone()).build();
        let derived = Object::builder().prototype(rex.clone()).build();

        assert!(rex.instance_of(&dog));
        assert!(rex.instance_of(&animal));
        assert!(derived.instance_of(&animal));
        assert!(!Object::new().instance_of(&animal));
    }

    #[test]
    fn tags() {
        assert_eq!(Object::new().tag(), "Object");
        assert_eq!(Array::new(Vec::<Value>::new()).as_object().tag(), "Array");
        assert_eq!(Object::boxed(Primitive::Boolean(true)).tag(), "Boolean");
        let point = Class::new("Point");
        assert_eq!(Object::builder().class(point).build().tag(), "Point");
    }
}

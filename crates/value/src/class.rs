//! Class tags for instance checks.

use std::fmt;
use std::sync::Arc;

/// A constructor identity that objects can be tagged with.
///
/// Classes form single-inheritance chains; an object tagged with a subclass
/// is an instance of every ancestor.
///
/// ```rust
/// use sift_value::Class;
///
/// let error = Class::new("Error");
/// let type_error = Class::extends("TypeError", &error);
/// assert!(type_error.is_subclass_of(&error));
/// assert!(!error.is_subclass_of(&type_error));
/// ```
#[derive(Clone)]
pub struct Class(Arc<ClassData>);

struct ClassData {
    name: Arc<str>,
    parent: Option<Class>,
}

impl Class {
    /// Creates a root class.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(Arc::new(ClassData {
            name: name.into(),
            parent: None,
        }))
    }

    /// Creates a class that inherits from `parent`.
    pub fn extends(name: impl Into<Arc<str>>, parent: &Self) -> Self {
        Self(Arc::new(ClassData {
            name: name.into(),
            parent: Some(parent.clone()),
        }))
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the parent class, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.0.parent.as_ref()
    }

    /// Returns true if `self` is `other` or inherits from it.
    #[must_use]
    pub fn is_subclass_of(&self, other: &Self) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == other {
                return true;
            }
            current = class.parent();
        }
        false
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name())
            .field("parent", &self.parent().map(Self::name))
            .finish()
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Class membership.

use sift_value::{Class, Object, Value};

crate::validator! {
    /// Accepts objects created by `class` or a subclass of it.
    ///
    /// Membership follows the prototype chain, so an object whose prototype
    /// is an instance also counts.
    ///
    /// ```rust
    /// use sift_validator::prelude::*;
    ///
    /// let error = Class::new("Error");
    /// let type_error = Class::extends("TypeError", &error);
    /// let thrown = Value::from(Object::builder().class(type_error).build());
    ///
    /// assert!(instance_of(error.clone()).validate(&thrown).is_ok());
    /// assert!(instance_of(error).validate(&Value::from("boom")).is_err());
    /// ```
    pub InstanceOf { class: Class } for Value => Object;
    narrow(self, input) { input.as_object().filter(|object| object.instance_of(&self.class)).cloned() }
    error(self, input) { format!("The value is not an instance of {}.", self.class.name()) }
    fn instance_of(class: Class);
}

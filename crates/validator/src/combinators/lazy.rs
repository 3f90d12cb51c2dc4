//! LAZY combinator - deferred validator initialization

use std::sync::OnceLock;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// Defers validator creation until first use.
///
/// The main use is recursive shapes: a validator that mentions itself
/// cannot be built eagerly, but it can hand out a `lazy` reference to its
/// own constructor.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// // { "value": number, "children": [tree] }
/// fn tree() -> BoxedValidator<Value, Object> {
///     props(
///         Props::new()
///             .field("value", number())
///             .field("children", array_of(lazy(tree))),
///     )
///     .boxed()
/// }
///
/// let leaf = || {
///     Object::builder()
///         .property("value", 2)
///         .property("children", Value::array(Vec::<Value>::new()))
///         .build()
/// };
/// let root = Object::builder()
///     .property("value", 1)
///     .property("children", Value::array([leaf(), leaf()]))
///     .build();
///
/// assert!(tree().validate(&Value::from(root)).is_ok());
/// ```
pub struct Lazy<V, F>
where
    F: Fn() -> V,
{
    init: F,
    validator: OnceLock<V>,
}

impl<V, F> Lazy<V, F>
where
    F: Fn() -> V,
{
    /// Creates a new LAZY combinator.
    ///
    /// The `init` function is called once on first validation.
    pub fn new(init: F) -> Self {
        Self {
            init,
            validator: OnceLock::new(),
        }
    }

    /// Returns a reference to the initialized validator, if any.
    pub fn get(&self) -> Option<&V> {
        self.validator.get()
    }

    /// Returns true if the validator has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.validator.get().is_some()
    }

    /// Forces initialization and returns a reference to the validator.
    pub fn force(&self) -> &V {
        self.validator.get_or_init(&self.init)
    }
}

impl<V, F> Validate for Lazy<V, F>
where
    V: Validate,
    F: Fn() -> V,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> Result<V::Output, ValidationError> {
        self.force().validate(input)
    }
}

// Manual Debug impl since F might not implement Debug
impl<V, F> std::fmt::Debug for Lazy<V, F>
where
    V: std::fmt::Debug,
    F: Fn() -> V,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy")
            .field("validator", &self.validator.get())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

/// Creates a LAZY combinator.
pub fn lazy<V, F>(init: F) -> Lazy<V, F>
where
    F: Fn() -> V,
{
    Lazy::new(init)
}

// ============================================================================
// TESTS
// ============================================================================

//! Unique symbols.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A unique, identity-compared symbol.
///
/// Two symbols are equal only if they are clones of the same handle, even
/// when their descriptions match.
///
/// ```rust
/// use sift_value::Symbol;
///
/// let a = Symbol::new("id");
/// let b = Symbol::new("id");
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// ```
#[derive(Clone)]
pub struct Symbol(Arc<SymbolData>);

struct SymbolData {
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Creates a new symbol with a description.
    pub fn new(description: impl Into<Arc<str>>) -> Self {
        Self(Arc::new(SymbolData {
            description: Some(description.into()),
        }))
    }

    /// Creates a new symbol without a description.
    #[must_use]
    pub fn anonymous() -> Self {
        Self(Arc::new(SymbolData { description: None }))
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_not_description() {
        let a = Symbol::new("x");
        assert_eq!(a, a.clone());
        assert_ne!(a, Symbol::new("x"));
    }

    #[test]
    fn hash_follows_identity() {
        let a = Symbol::new("x");
        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(Symbol::new("x"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Symbol::new("tag").to_string(), "Symbol(tag)");
        assert_eq!(Symbol::anonymous().to_string(), "Symbol()");
    }
}

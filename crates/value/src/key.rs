//! Property keys.

use std::fmt;
use std::sync::Arc;

use crate::display::format_number;
use crate::symbol::Symbol;

/// The key of an object property: a string or a symbol.
///
/// Numeric keys are normalised to their canonical string form, so `1`,
/// `1.0` and `"1"` all name the same property.
///
/// ```rust
/// use sift_value::PropertyKey;
///
/// assert_eq!(PropertyKey::from_number(1.0), PropertyKey::from("1"));
/// assert_eq!(PropertyKey::from("7").array_index(), Some(7));
/// assert_eq!(PropertyKey::from("07").array_index(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// A string key.
    String(Arc<str>),
    /// A symbol key.
    Symbol(Symbol),
}

impl PropertyKey {
    /// Builds the canonical key for a number.
    #[must_use]
    pub fn from_number(number: f64) -> Self {
        Self::String(format_number(number).into())
    }

    /// Returns the key as a string slice if it is a string key.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Symbol(_) => None,
        }
    }

    /// Returns the symbol if it is a symbol key.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::String(_) => None,
        }
    }

    /// Returns true for symbol keys.
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    /// Returns the integer index this key denotes, if it is a canonical
    /// non-negative integer string (`"0"`, `"42"`, never `"01"` or `"-1"`).
    #[must_use]
    pub fn array_index(&self) -> Option<usize> {
        let s = self.as_str()?;
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if s.len() > 1 && s.starts_with('0') {
            return None;
        }
        s.parse::<u32>().ok().filter(|&i| i < u32::MAX).map(|i| i as usize)
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for PropertyKey {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<usize> for PropertyKey {
    fn from(index: usize) -> Self {
        Self::String(index.to_string().into())
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Symbol(symbol) => fmt::Display::fmt(symbol, f),
        }
    }
}

//! Runtime kind classification.

use std::fmt;

/// The `typeof` classification of a [`Value`](crate::Value).
///
/// Note the two historical quirks that validators rely on: `null` reports
/// [`ValueKind::Object`], and callable objects report
/// [`ValueKind::Function`] rather than `Object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Object,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
}

impl ValueKind {
    /// Returns the `typeof` string for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Object => "object",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Function => "function",
        }
    }

    /// Returns true for the primitive kinds.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        !matches!(self, Self::Object | Self::Function)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

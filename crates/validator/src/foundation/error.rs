//! Failure reasons
//!
//! A failed validation produces a [`ValidationError`]: a tree whose leaves are
//! plain messages and whose interior nodes either wrap a single cause with
//! context (`"The property \"name\" is invalid."`) or collect several causes
//! (one per failed branch of an `or`).

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Why a value was rejected.
///
/// # Examples
///
/// ```rust
/// use sift_validator::foundation::ValidationError;
///
/// let reason = ValidationError::wrapped(
///     "The property \"age\" is invalid.",
///     ValidationError::new("The value is not a number."),
/// );
///
/// assert_eq!(reason.message(), Some("The property \"age\" is invalid."));
/// assert_eq!(
///     reason.cause().and_then(ValidationError::message),
///     Some("The value is not a number.")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A leaf reason.
    #[error("{0}")]
    Message(Cow<'static, str>),

    /// A reason that adds context to a deeper cause.
    #[error("{message}")]
    Wrapped {
        message: Cow<'static, str>,
        #[source]
        cause: Box<ValidationError>,
    },

    /// Several reasons at the same level, in the order they were produced.
    #[error("{} reasons", .0.len())]
    Many(Vec<ValidationError>),
}

impl ValidationError {
    // ==================== Constructors ====================

    /// Creates a leaf reason.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Message(message.into())
    }

    /// Wraps `cause` with a message describing where it happened.
    pub fn wrapped(message: impl Into<Cow<'static, str>>, cause: impl Into<Self>) -> Self {
        Self::Wrapped {
            message: message.into(),
            cause: Box::new(cause.into()),
        }
    }

    /// Wraps a list of causes under one message.
    ///
    /// This is the shape `or` produces: a summary message whose cause is the
    /// list of per-branch reasons.
    pub fn aggregate(message: impl Into<Cow<'static, str>>, causes: Vec<Self>) -> Self {
        Self::wrapped(message, Self::Many(causes))
    }

    /// Creates a bare list of reasons.
    #[must_use]
    pub fn many(causes: Vec<Self>) -> Self {
        Self::Many(causes)
    }

    // ==================== Accessors ====================

    /// Returns the message of a leaf or wrapped reason.
    ///
    /// A bare list has no message of its own.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) | Self::Wrapped { message, .. } => Some(message),
            Self::Many(_) => None,
        }
    }

    /// Returns the wrapped cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        match self {
            Self::Wrapped { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// Returns the direct children of this reason.
    ///
    /// For an aggregate this skips the intermediate list, so the branch
    /// reasons of an `or` come back directly.
    #[must_use]
    pub fn causes(&self) -> &[Self] {
        match self {
            Self::Message(_) => &[],
            Self::Wrapped { cause, .. } => match cause.as_ref() {
                Self::Many(causes) => causes,
                _ => std::slice::from_ref(cause),
            },
            Self::Many(causes) => causes,
        }
    }

    /// Returns true for a reason with no causes.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Message(_))
    }

    /// Counts message-bearing reasons in the whole tree.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        match self {
            Self::Message(_) => 1,
            Self::Wrapped { cause, .. } => 1 + cause.total_error_count(),
            Self::Many(causes) => causes.iter().map(Self::total_error_count).sum(),
        }
    }

    /// Returns every message-bearing reason, depth first.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Self>) {
        match self {
            Self::Message(_) => out.push(self),
            Self::Wrapped { cause, .. } => {
                out.push(self);
                cause.collect_into(out);
            }
            Self::Many(causes) => {
                for cause in causes {
                    cause.collect_into(out);
                }
            }
        }
    }

    /// Returns the messages of the leaves, depth first.
    ///
    /// These are the innermost explanations, e.g. `"The value is not a
    /// string."` rather than the property context around it.
    #[must_use]
    pub fn leaf_messages(&self) -> Vec<&str> {
        self.flatten()
            .into_iter()
            .filter(|reason| reason.is_leaf())
            .filter_map(Self::message)
            .collect()
    }

    // ==================== Rendering ====================

    /// Renders the whole tree as JSON.
    ///
    /// A leaf becomes its message, a wrapped reason becomes
    /// `{"message": .., "cause": ..}` and a list becomes an array.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Message(message) => serde_json::Value::String(message.to_string()),
            Self::Wrapped { message, cause } => serde_json::json!({
                "message": message,
                "cause": cause.to_json_value(),
            }),
            Self::Many(causes) => {
                serde_json::Value::Array(causes.iter().map(Self::to_json_value).collect())
            }
        }
    }

    /// Returns a [`Display`](fmt::Display) adapter that renders the whole
    /// tree, one reason per line, indented by depth.
    ///
    /// ```rust
    /// use sift_validator::foundation::ValidationError;
    ///
    /// let reason = ValidationError::aggregate(
    ///     "The value does not satisfy any of the validators.",
    ///     vec![
    ///         ValidationError::new("The value is not a string."),
    ///         ValidationError::new("The value is not a number."),
    ///     ],
    /// );
    ///
    /// assert_eq!(
    ///     reason.tree().to_string(),
    ///     "The value does not satisfy any of the validators.\n  \
    ///      The value is not a string.\n  \
    ///      The value is not a number."
    /// );
    /// ```
    #[must_use]
    pub fn tree(&self) -> Tree<'_> {
        Tree(self)
    }
}

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        Self::Message(Cow::Borrowed(message))
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::Message(Cow::Owned(message))
    }
}

impl From<Cow<'static, str>> for ValidationError {
    fn from(message: Cow<'static, str>) -> Self {
        Self::Message(message)
    }
}

// ============================================================================
// TREE RENDERING
// ============================================================================

/// Indented rendering of a [`ValidationError`] tree.
#[derive(Debug, Clone, Copy)]
pub struct Tree<'a>(&'a ValidationError);

impl<'a> Tree<'a> {
    fn lines(reason: &'a ValidationError, depth: usize, out: &mut Vec<(usize, &'a str)>) {
        match reason {
            ValidationError::Message(message) => out.push((depth, message)),
            ValidationError::Wrapped { message, cause } => {
                out.push((depth, message));
                Self::lines(cause, depth + 1, out);
            }
            // A list has no line of its own; its items sit at the list's depth.
            ValidationError::Many(causes) => {
                for cause in causes {
                    Self::lines(cause, depth, out);
                }
            }
        }
    }
}

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        Tree::lines(self.0, 0, &mut lines);

        for (i, (depth, message)) in lines.into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{:indent$}{message}", "", indent = depth * 2)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    fn nested() -> ValidationError {
        ValidationError::wrapped(
            "The property \"user\" is invalid.",
            ValidationError::aggregate(
                "The value does not satisfy any of the validators.",
                vec![
                    ValidationError::new("The value is not a string."),
                    ValidationError::wrapped(
                        "The property \"id\" is invalid.",
                        "The value is not a number.",
                    ),
                ],
            ),
        )
    }

    #[test]
    fn test_display_is_top_message() {
        assert_eq!(nested().to_string(), "The property \"user\" is invalid.");
        assert_eq!(ValidationError::many(vec![]).to_string(), "0 reasons");
    }

    #[test]
    fn test_source_chain() {
        let reason = nested();
        let source = reason.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("The value does not satisfy any of the validators.")
        );
        assert!(ValidationError::new("leaf").source().is_none());
    }

    #[test]
    fn test_causes_skip_the_list() {
        let reason = nested();
        let inner = &reason.causes()[0];
        assert_eq!(inner.causes().len(), 2);
        assert!(inner.causes()[0].is_leaf());
        assert!(ValidationError::new("leaf").causes().is_empty());
    }

    #[test]
    fn test_counts_and_leaves() {
        let reason = nested();
        assert_eq!(reason.total_error_count(), 5);
        assert_eq!(reason.flatten().len(), 5);
        assert_eq!(
            reason.leaf_messages(),
            vec!["The value is not a string.", "The value is not a number."]
        );
    }

    #[test]
    fn test_tree_rendering() {
        let expected = [
            "The property \"user\" is invalid.",
            "  The value does not satisfy any of the validators.",
            "    The value is not a string.",
            "    The property \"id\" is invalid.",
            "      The value is not a number.",
        ]
        .join("\n");
        assert_eq!(nested().tree().to_string(), expected);
    }

    #[test]
    fn test_json_rendering() {
        let json = ValidationError::aggregate("none matched", vec!["a".into(), "b".into()])
            .to_json_value();
        assert_eq!(
            json,
            serde_json::json!({ "message": "none matched", "cause": ["a", "b"] })
        );
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(nested(), nested());
        assert_ne!(
            ValidationError::new("a"),
            ValidationError::wrapped("a", "b")
        );
    }
}

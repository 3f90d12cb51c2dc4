//! Human-readable rendering of values.

use std::fmt;

use crate::object::ObjectKind;
use crate::value::Value;

/// Formats a number the way a dynamic host prints it: integral values
/// without a fractional part, `-0` as `0`, `NaN` / `Infinity` spelled out,
/// and exponent notation below `1e-6` or from `1e21` up.
///
/// ```rust
/// use sift_value::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
#[must_use]
pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_owned()
    } else if number.is_infinite() {
        let sign = if number > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if number == 0.0 {
        "0".to_owned()
    } else if (1e-6..1e21).contains(&number.abs()) {
        format!("{number}")
    } else {
        exponential(number)
    }
}

/// `1e21` as `1e+21`, `1.5e-7` as `1.5e-7`.
fn exponential(number: f64) -> String {
    let formatted = format!("{number:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::BigInt(n) => write!(f, "{n}n"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::Object(object) => match object.kind() {
                ObjectKind::Ordinary => write!(f, "[object {}]", object.tag()),
                ObjectKind::Array(_) => f.write_str("[object Array]"),
                ObjectKind::Function { name, .. } if name.is_empty() => {
                    f.write_str("[Function (anonymous)]")
                }
                ObjectKind::Function { name, .. } => write!(f, "[Function {name}]"),
                ObjectKind::Boxed(primitive) => {
                    write!(f, "[{}: {}]", primitive.wrapper_name(), primitive.to_value())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::Class;
    use crate::object::{Array, Function, Object};
    use crate::symbol::Symbol;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, "undefined")]
    #[case(Value::Null, "null")]
    #[case(Value::Boolean(true), "true")]
    #[case(Value::Number(42.0), "42")]
    #[case(Value::Number(1.5), "1.5")]
    #[case(Value::BigInt(10), "10n")]
    #[case(Value::from("hi"), "\"hi\"")]
    #[case(Value::Symbol(Symbol::new("s")), "Symbol(s)")]
    #[case(Value::Object(Object::new()), "[object Object]")]
    #[case(Value::from(Array::new([1, 2, 3])), "[object Array]")]
    #[case(Value::from(Function::new("run", 0)), "[Function run]")]
    #[case(Value::from(Function::new("", 0)), "[Function (anonymous)]")]
    #[case(Value::Object(Value::from("x").to_object()), "[String: \"x\"]")]
    fn display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn display_class_instance() {
        let point = Class::new("Point");
        let value = Value::Object(Object::builder().class(point).build());
        assert_eq!(value.to_string(), "[object Point]");
    }
}

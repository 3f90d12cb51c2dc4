//! Conversions into [`Value`].

use std::sync::Arc;

use crate::key::PropertyKey;
use crate::object::{Array, Function, Object, ObjectBuilder};
use crate::symbol::Symbol;
use crate::value::Value;

macro_rules! impl_from {
    ($($ty:ty => |$v:ident| $body:expr),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from($v: $ty) -> Self {
                    $body
                }
            }
        )+
    };
}

impl_from! {
    bool => |b| Value::Boolean(b),
    f64 => |n| Value::Number(n),
    f32 => |n| Value::Number(f64::from(n)),
    i32 => |n| Value::Number(f64::from(n)),
    u32 => |n| Value::Number(f64::from(n)),
    i128 => |n| Value::BigInt(n),
    &str => |s| Value::String(s.into()),
    String => |s| Value::String(s.into()),
    Arc<str> => |s| Value::String(s),
    Symbol => |s| Value::Symbol(s),
    Object => |o| Value::Object(o),
    Array => |a| Value::Object(a.into_object()),
    Function => |f| Value::Object(f.into_object()),
}

impl From<PropertyKey> for Value {
    fn from(key: PropertyKey) -> Self {
        match key {
            PropertyKey::String(s) => Self::String(s),
            PropertyKey::Symbol(s) => Self::Symbol(s),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::array(items)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::array(iter)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Self::from(&json)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Boolean(*b),
            Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Self::String(s.as_str().into()),
            Json::Array(items) => Self::array(items.iter().map(Self::from)),
            Json::Object(map) => Self::Object(
                map.iter()
                    .fold(ObjectBuilder::new(), |builder, (key, value)| {
                        builder.property(key.as_str(), Self::from(value))
                    })
                    .build(),
            ),
        }
    }
}

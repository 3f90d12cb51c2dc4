//! JSON-style serialization.
//!
//! Mirrors what a JSON encoder of a dynamic host emits: `undefined`,
//! functions and symbols become `null`, boxed primitives serialize as their
//! primitive, and objects serialize their enumerable own string keys.
//! Bigints serialize as integers.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::key::PropertyKey;
use crate::object::{Object, ObjectKind};
use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null | Self::Symbol(_) => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Self::Number(_) => serializer.serialize_unit(),
            Self::BigInt(n) => serializer.serialize_i128(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Object(object) => object.serialize(serializer),
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.kind() {
            ObjectKind::Function { .. } => serializer.serialize_unit(),
            ObjectKind::Boxed(primitive) => primitive.to_value().serialize(serializer),
            ObjectKind::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ObjectKind::Ordinary => {
                let keys: Vec<PropertyKey> = self
                    .own_keys()
                    .into_iter()
                    .filter(|key| !key.is_symbol())
                    .collect();
                let mut map = serializer.serialize_map(Some(keys.len()))?;
                for key in &keys {
                    let value = self.get_own(key).unwrap_or_default();
                    map.serialize_entry(&key.to_string(), &value)?;
                }
                map.end()
            }
        }
    }
}

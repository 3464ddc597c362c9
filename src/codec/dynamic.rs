use crate::error::EncodeError;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Any JSON value, for fields the node's schema leaves open.
///
/// Integers are kept apart from floating point numbers so that `7` re-encodes as `7`
/// and not `7.0`. Integers above `i64::MAX` land in [`DynamicValue::Unsigned`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DynamicValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    String(String),
    Array(Vec<DynamicValue>),
    Object(BTreeMap<String, DynamicValue>),
}

impl DynamicValue {
    /// Classifies an already parsed JSON node, recursing into arrays and objects.
    pub fn from_json(json: &Value) -> Self {
        match json {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::from_number(n),
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::Array(items.iter().map(Self::from_json).collect()),
            Value::Object(entries) => Self::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Self::from_json(value)))
                    .collect(),
            ),
        }
    }

    // Integer before float: `as_f64` would happily accept `7` too.
    fn from_number(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            Self::Integer(i)
        } else if let Some(u) = n.as_u64() {
            Self::Unsigned(u)
        } else {
            n.as_f64()
                .map_or_else(|| Self::String(n.to_string()), Self::Float)
        }
    }

    /// Inverse of [`DynamicValue::from_json`].
    ///
    /// # Errors
    ///
    /// * [`EncodeError::NonFiniteFloat`] if a `NaN` or infinite float is found anywhere in the tree.
    pub fn to_json(&self) -> Result<Value, EncodeError> {
        Ok(match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Integer(i) => Value::Number((*i).into()),
            Self::Unsigned(u) => Value::Number((*u).into()),
            Self::Float(f) => Value::Number(Number::from_f64(*f).ok_or(EncodeError::NonFiniteFloat(*f))?),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(
                items
                    .iter()
                    .map(Self::to_json)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Self::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| Ok((key.clone(), value.to_json()?)))
                    .collect::<Result<Map<_, _>, EncodeError>>()?,
            ),
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Unsigned(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(i) => u64::try_from(*i).ok(),
            Self::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    /// Any number as `f64`, integers included.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Unsigned(u) => Some(*u as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[DynamicValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, DynamicValue>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up `key` when this is an object.
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.as_object().and_then(|entries| entries.get(key))
    }
}

impl From<&Value> for DynamicValue {
    fn from(json: &Value) -> Self {
        Self::from_json(json)
    }
}

impl From<Value> for DynamicValue {
    fn from(json: Value) -> Self {
        Self::from_json(&json)
    }
}

impl TryFrom<&DynamicValue> for Value {
    type Error = EncodeError;

    fn try_from(value: &DynamicValue) -> Result<Self, Self::Error> {
        value.to_json()
    }
}

impl From<bool> for DynamicValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for DynamicValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<u64> for DynamicValue {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Self::Unsigned(u), Self::Integer)
    }
}

impl From<f64> for DynamicValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(items: Vec<DynamicValue>) -> Self {
        Self::Array(items)
    }
}

impl From<BTreeMap<String, DynamicValue>> for DynamicValue {
    fn from(entries: BTreeMap<String, DynamicValue>) -> Self {
        Self::Object(entries)
    }
}

impl Serialize for DynamicValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Unsigned(u) => serializer.serialize_u64(*u),
            Self::Float(f) if !f.is_finite() => {
                Err(ser::Error::custom(EncodeError::NonFiniteFloat(*f)))
            }
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct DynamicValueVisitor;

impl<'de> Visitor<'de> for DynamicValueVisitor {
    type Value = DynamicValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DynamicValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DynamicValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        DynamicValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Self::Value, E> {
        Ok(DynamicValue::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Integer(i))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> Result<Self::Value, E> {
        Ok(DynamicValue::from(u))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Float(f))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
        Ok(DynamicValue::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
        Ok(DynamicValue::String(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(DynamicValue::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, DynamicValue>()? {
            entries.insert(key, value);
        }
        Ok(DynamicValue::Object(entries))
    }
}

impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DynamicValueVisitor)
    }
}

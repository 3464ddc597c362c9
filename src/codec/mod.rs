//! Tagged-union JSON codec.
//!
//! The node's schema describes most of its polymorphic types as `oneOf`/`anyOf` lists
//! without a single discriminant convention. Each union therefore declares an ordered list
//! of [`Variant`]s, each recognised on the wire by a [`MatchRule`]:
//!
//! * [`MatchRule::ExternalKey`]: `{"FunctionCall": {...}}`, the key names the variant.
//! * [`MatchRule::InternalTag`]: `{"name": "HANDLER_ERROR", "cause": ...}`, a field names the variant.
//! * [`MatchRule::BareScalar`]: `"FullAccess"`, a literal is the whole variant.
//! * [`MatchRule::BareTyped`]: no marker at all, the first payload type that parses wins.
//!
//! [`decode`] tries the rules in declared order and returns the first full match. If
//! none match, [`DecodeError::NoVariantMatched`] carries one [`Attempt`] per rule.
//!
//! Unions are normally declared with [`impl_tagged_union!`](crate::impl_tagged_union), which
//! also implements `Serialize` / `Deserialize` so they nest inside ordinary serde DTOs.

mod diagnostics;
mod dynamic;
mod macros;

pub use diagnostics::*;
pub use dynamic::DynamicValue;

use crate::error::{DecodeError, EncodeError};
use serde::de::DeserializeOwned;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::*;

/// How one alternative of a union is recognised in JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    /// Single recognised key (matched case-insensitively); its value is the payload.
    ExternalKey(&'static str),
    /// `field` (matched case-insensitively) must hold exactly `value`; the other fields are the payload.
    InternalTag {
        field: &'static str,
        value: &'static str,
    },
    /// The whole value must be this exact string.
    BareScalar(&'static str),
    /// The whole value is the payload.
    BareTyped,
}

/// Decodes a variant from the payload selected by its rule.
pub type PayloadDecoder<U> = fn(&Value) -> Result<U, PayloadError>;

/// Returns `None` when the value is another variant; `Some(Ok(None))` for unit variants.
pub type PayloadEncoder<U> = fn(&U) -> Option<serde_json::Result<Option<Value>>>;

/// One declared alternative of a union.
pub struct Variant<U> {
    pub label: &'static str,
    pub rule: MatchRule,
    pub decode: PayloadDecoder<U>,
    pub encode: PayloadEncoder<U>,
}

/// A sum type whose JSON shape is described by an ordered list of [`Variant`]s.
///
/// The order of [`TaggedUnion::VARIANTS`] is part of the type's contract: when several
/// rules accept the same input, the first one is authoritative.
pub trait TaggedUnion: Sized + 'static {
    const NAME: &'static str;
    const VARIANTS: &'static [Variant<Self>];

    fn from_json(json: &Value) -> Result<Self, DecodeError> {
        decode(json)
    }

    fn to_json(&self) -> Result<Value, EncodeError> {
        encode(self)
    }
}

/// Decodes `json` into the first variant of `U` whose rule and payload both match.
///
/// # Errors
///
/// * [`DecodeError::NoVariantMatched`] if every declared rule fails.
pub fn decode<U: TaggedUnion>(json: &Value) -> Result<U, DecodeError> {
    let mut attempts = Vec::with_capacity(U::VARIANTS.len());

    for variant in U::VARIANTS {
        match variant.attempt(json) {
            Ok(value) => {
                trace!(union = U::NAME, variant = variant.label, "variant matched");
                return Ok(value);
            }
            Err(failure) => {
                trace!(union = U::NAME, variant = variant.label, %failure, "variant rejected");
                attempts.push(Attempt::new(variant.label, failure));
            }
        }
    }

    let keys = json
        .as_object()
        .map(|object| object.keys().cloned().collect());

    debug!(
        union = U::NAME,
        attempts = attempts.len(),
        "no variant matched"
    );

    Err(DecodeError::NoVariantMatched {
        union: U::NAME,
        attempts,
        keys,
    })
}

/// Encodes `value` into the JSON shape its variant's rule dictates.
///
/// # Errors
///
/// * [`EncodeError::Payload`] if the payload itself cannot be serialized.
/// * [`EncodeError::UntaggablePayload`] if an internally tagged payload is not an object.
/// * [`EncodeError::UndeclaredVariant`] if the union's declaration misses a variant.
pub fn encode<U: TaggedUnion>(value: &U) -> Result<Value, EncodeError> {
    for variant in U::VARIANTS {
        let Some(payload) = (variant.encode)(value) else {
            continue;
        };

        let payload = payload.map_err(|error| EncodeError::Payload {
            union: U::NAME,
            variant: variant.label,
            error,
        })?;

        return variant.wrap(U::NAME, payload);
    }

    Err(EncodeError::UndeclaredVariant(U::NAME))
}

/// Decodes a payload, recording the path to the first failure inside it.
pub fn decode_payload<T: DeserializeOwned>(payload: &Value) -> Result<T, PayloadError> {
    serde_path_to_error::deserialize(payload)
}

/// `Serialize` body shared by every union.
pub fn serialize<U: TaggedUnion, S: Serializer>(value: &U, serializer: S) -> Result<S::Ok, S::Error> {
    encode(value)
        .map_err(ser::Error::custom)?
        .serialize(serializer)
}

/// `Deserialize` body shared by every union.
pub fn deserialize<'de, U: TaggedUnion, D: Deserializer<'de>>(deserializer: D) -> Result<U, D::Error> {
    let json = Value::deserialize(deserializer)?;
    decode(&json).map_err(de::Error::custom)
}

impl<U> Variant<U> {
    fn attempt(&self, json: &Value) -> Result<U, Failure> {
        match self.rule {
            MatchRule::ExternalKey(key) => {
                let object = expect_object(json)?;
                let (found, payload) = find_key(object, key)?;

                (self.decode)(payload)
                    .map_err(|e| Failure::from_payload(JsonPath::root().key(found), &e))
            }

            MatchRule::InternalTag { field, value } => {
                let object = expect_object(json)?;
                let (found, tag) = find_key(object, field)?;
                let path = || JsonPath::root().key(found);

                match tag {
                    Value::String(tag) if tag == value => {}
                    Value::String(tag) => {
                        return Err(Failure::new(
                            FailureKind::DataCorrupted,
                            path(),
                            format!("expected discriminant \"{value}\", found \"{tag}\""),
                        ))
                    }
                    Value::Null => {
                        return Err(Failure::new(
                            FailureKind::ValueNotFound,
                            path(),
                            format!("expected discriminant \"{value}\", found null"),
                        ))
                    }
                    other => return Err(Failure::type_mismatch(path(), "string discriminant", other)),
                }

                let remaining: Map<String, Value> = object
                    .iter()
                    .filter(|(key, _)| key.as_str() != found)
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();

                (self.decode)(&Value::Object(remaining))
                    .map_err(|e| Failure::from_payload(JsonPath::root(), &e))
            }

            MatchRule::BareScalar(literal) => match json {
                Value::String(s) if s == literal => (self.decode)(json)
                    .map_err(|e| Failure::from_payload(JsonPath::root(), &e)),
                Value::String(s) => Err(Failure::new(
                    FailureKind::DataCorrupted,
                    JsonPath::root(),
                    format!("expected literal \"{literal}\", found \"{s}\""),
                )),
                other => Err(Failure::type_mismatch(
                    JsonPath::root(),
                    &format!("literal \"{literal}\""),
                    other,
                )),
            },

            MatchRule::BareTyped => {
                (self.decode)(json).map_err(|e| Failure::from_payload(JsonPath::root(), &e))
            }
        }
    }

    fn wrap(&self, union: &'static str, payload: Option<Value>) -> Result<Value, EncodeError> {
        match self.rule {
            MatchRule::ExternalKey(key) => {
                let mut object = Map::new();
                object.insert(key.to_string(), payload.unwrap_or(Value::Null));
                Ok(Value::Object(object))
            }

            MatchRule::InternalTag { field, value } => {
                let mut object = match payload {
                    None => Map::new(),
                    Some(Value::Object(object)) => object,
                    Some(_) => {
                        return Err(EncodeError::UntaggablePayload {
                            union,
                            variant: self.label,
                            field,
                        })
                    }
                };
                object.insert(field.to_string(), Value::String(value.to_string()));
                Ok(Value::Object(object))
            }

            MatchRule::BareScalar(literal) => Ok(Value::String(literal.to_string())),

            MatchRule::BareTyped => Ok(payload.unwrap_or(Value::Null)),
        }
    }
}

fn expect_object(json: &Value) -> Result<&Map<String, Value>, Failure> {
    json.as_object()
        .ok_or_else(|| Failure::type_mismatch(JsonPath::root(), "object", json))
}

/// Exactly one key of `object` may match `key`, ignoring ASCII case.
fn find_key<'a>(
    object: &'a Map<String, Value>,
    key: &str,
) -> Result<(&'a str, &'a Value), Failure> {
    let mut matches = object
        .iter()
        .filter(|(candidate, _)| candidate.eq_ignore_ascii_case(key));

    match (matches.next(), matches.next()) {
        (Some((found, value)), None) => Ok((found.as_str(), value)),
        (None, _) => Err(Failure::new(
            FailureKind::KeyNotFound,
            JsonPath::root(),
            format!("no key matching \"{key}\""),
        )),
        (Some((first, _)), Some((second, _))) => Err(Failure::new(
            FailureKind::DataCorrupted,
            JsonPath::root(),
            format!("keys \"{first}\" and \"{second}\" both match \"{key}\""),
        )),
    }
}

use crate::{impl_tagged_union, Error, Result, RpcMethod};
use serde::de::{DeserializeOwned, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use typed_builder::TypedBuilder;

pub const JSONRPC_VERSION: &str = "2.0";

/// The node accepts any id and echoes it back; the reference clients send `"dontcare"`.
pub const DEFAULT_REQUEST_ID: &str = "dontcare";

/// JSON-RPC request id: either a number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RequestId {
    Number(u64),
    Text(String),
}

impl_tagged_union!(RequestId {
    Number(u64) => BareTyped,
    Text(String) => BareTyped,
});

impl Default for RequestId {
    fn default() -> Self {
        Self::Text(DEFAULT_REQUEST_ID.to_string())
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct JsonRpcRequest<P> {
    #[builder(default = JSONRPC_VERSION.to_string())]
    pub jsonrpc: String,
    #[builder(default, setter(into))]
    pub id: RequestId,
    pub method: RpcMethod,
    pub params: P,
}

impl<P> JsonRpcRequest<P> {
    pub fn new(method: RpcMethod, params: P) -> Self {
        Self::builder().method(method).params(params).build()
    }
}

/// Parameters of methods that take none: the node expects a literal JSON `null`.
///
/// Decoding accepts only `null`; `{}`, `0`, `""` and an absent field are all rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullParams;

pub type RpcHealthRequest = NullParams;
pub type RpcStatusRequest = NullParams;
pub type RpcNetworkInfoRequest = NullParams;
pub type RpcClientConfigRequest = NullParams;
pub type GenesisConfigRequest = NullParams;

impl Serialize for NullParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for NullParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Through `Value` rather than `deserialize_unit`, so a missing field is an error and not `()`.
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self),
            other => Err(serde::de::Error::invalid_type(unexpected(&other), &"null")),
        }
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => Unexpected::Unsigned(u),
            (_, Some(i), _) => Unexpected::Signed(i),
            (_, _, Some(f)) => Unexpected::Float(f),
            _ => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Body of a JSON-RPC response: either `result` or `error`.
#[derive(Clone, Debug, PartialEq)]
pub enum RpcOutcome<T> {
    Result(T),
    Error(RpcError),
}

impl_tagged_union!([T: Serialize + DeserializeOwned + 'static] RpcOutcome<T> {
    Result(T) => ExternalKey("result"),
    Error(RpcError) => ExternalKey("error"),
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned + 'static")]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    pub id: RequestId,
    #[serde(flatten)]
    pub outcome: RpcOutcome<T>,
}

impl<T> JsonRpcResponse<T> {
    /// Unwraps the `result`, turning an `error` body into [`Error::JsonRpc`].
    pub fn into_result(self) -> Result<T> {
        match self.outcome {
            RpcOutcome::Result(result) => Ok(result),
            RpcOutcome::Error(error) => Err(Error::JsonRpc(error)),
        }
    }
}

/// Parses a raw response body, keeping the text around when it does not fit `T`.
pub fn parse_response<T>(text: &str) -> Result<JsonRpcResponse<T>>
where
    T: Serialize + DeserializeOwned + 'static,
{
    serde_json::from_str(text).map_err(|error| Error::Deserialization {
        error,
        text: text.to_string(),
    })
}

mod access_key;
mod block;
mod chunk;
mod errors;
mod query;

pub use access_key::*;
pub use block::*;
pub use chunk::*;
pub use errors::*;
pub use query::*;

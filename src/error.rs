pub use crate::api::types::RpcError;
use crate::codec::{render, Attempt};
use thiserror::Error;

/// The crate `Error` type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("JsonRpcError: {0:?}")]
    JsonRpc(RpcError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Failed to deserialize into JSON: {text}")]
    Deserialization {
        #[source]
        error: serde_json::Error,
        text: String,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown JSON-RPC method: {0}")]
    UnknownMethod(String),
}

/// Failure to decode a JSON value into a tagged union.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Every declared variant rule rejected the input.
    #[error("{}", render(.union, .attempts, .keys.as_deref()))]
    NoVariantMatched {
        /// Name of the union that was being decoded.
        union: &'static str,
        /// One entry per declared rule, in declared order.
        attempts: Vec<Attempt>,
        /// Keys present on the input, when it was a JSON object.
        keys: Option<Vec<String>>,
    },
}

impl DecodeError {
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            Self::NoVariantMatched { attempts, .. } => attempts,
        }
    }

    pub fn keys(&self) -> Option<&[String]> {
        match self {
            Self::NoVariantMatched { keys, .. } => keys.as_deref(),
        }
    }
}

/// Failure to turn a value back into JSON.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("{0} cannot be represented as a JSON number")]
    NonFiniteFloat(f64),

    #[error("failed to encode payload of {union}::{variant}: {error}")]
    Payload {
        union: &'static str,
        variant: &'static str,
        #[source]
        error: serde_json::Error,
    },

    #[error("{union}::{variant} is tagged by `{field}` but its payload is not a JSON object")]
    UntaggablePayload {
        union: &'static str,
        variant: &'static str,
        field: &'static str,
    },

    #[error("value of {0} matches none of its declared variants")]
    UndeclaredVariant(&'static str),
}

/// The crate `Result` type.
pub type Result<T> = core::result::Result<T, Error>;

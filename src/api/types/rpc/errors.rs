use crate::api::types::CryptoHash;
use crate::codec::DynamicValue;
use crate::{impl_tagged_union, Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Payload of variants carried under `cause`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorCause<C> {
    pub cause: C,
}

/// Payload of variants carried under `info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo<I> {
    pub info: I,
}

/// The `error` member of a failed JSON-RPC response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    #[serde(flatten)]
    pub kind: RpcErrorKind,
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DynamicValue>,
}

impl RpcError {
    /// Decodes the cause of a `HANDLER_ERROR` as the method's own error type.
    ///
    /// Returns `None` for request validation and internal errors.
    pub fn handler_cause<C: DeserializeOwned>(&self) -> Option<Result<C>> {
        let RpcErrorKind::HandlerError(ErrorCause { cause }) = &self.kind else {
            return None;
        };

        Some(
            cause
                .to_json()
                .map_err(Error::from)
                .and_then(|json| serde_json::from_value(json).map_err(Error::from)),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RpcErrorKind {
    RequestValidationError(ErrorCause<RpcRequestValidationErrorKind>),
    /// The cause depends on the method; see [`RpcError::handler_cause`].
    HandlerError(ErrorCause<DynamicValue>),
    InternalError(ErrorCause<DynamicValue>),
}

impl_tagged_union!(RpcErrorKind {
    RequestValidationError(ErrorCause<RpcRequestValidationErrorKind>) => InternalTag { field: "name", value: "REQUEST_VALIDATION_ERROR" },
    HandlerError(ErrorCause<DynamicValue>) => InternalTag { field: "name", value: "HANDLER_ERROR" },
    InternalError(ErrorCause<DynamicValue>) => InternalTag { field: "name", value: "INTERNAL_ERROR" },
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNotFoundInfo {
    pub method_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseErrorInfo {
    pub error_message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RpcRequestValidationErrorKind {
    MethodNotFound(ErrorInfo<MethodNotFoundInfo>),
    ParseError(ErrorInfo<ParseErrorInfo>),
}

impl_tagged_union!(RpcRequestValidationErrorKind {
    MethodNotFound(ErrorInfo<MethodNotFoundInfo>) => InternalTag { field: "name", value: "METHOD_NOT_FOUND" },
    ParseError(ErrorInfo<ParseErrorInfo>) => InternalTag { field: "name", value: "PARSE_ERROR" },
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvalidTransactionInfo {
    pub context: DynamicValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRoutedInfo {
    pub transaction_hash: CryptoHash,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownTransactionInfo {
    pub requested_transaction_hash: CryptoHash,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalErrorInfo {
    pub debug_info: String,
}

/// Handler cause of `tx`, `send_tx` and `broadcast_tx_commit` failures.
///
/// `DoesNotTrackShard` and `TimeoutError` carry no payload and share one shape; both are
/// kept, each keyed by its own `name`.
#[derive(Clone, Debug, PartialEq)]
pub enum RpcTransactionError {
    InvalidTransaction(ErrorInfo<InvalidTransactionInfo>),
    DoesNotTrackShard,
    RequestRouted(ErrorInfo<RequestRoutedInfo>),
    UnknownTransaction(ErrorInfo<UnknownTransactionInfo>),
    InternalError(ErrorInfo<InternalErrorInfo>),
    TimeoutError,
}

impl_tagged_union!(RpcTransactionError {
    InvalidTransaction(ErrorInfo<InvalidTransactionInfo>) => InternalTag { field: "name", value: "INVALID_TRANSACTION" },
    DoesNotTrackShard => InternalTag { field: "name", value: "DOES_NOT_TRACK_SHARD" },
    RequestRouted(ErrorInfo<RequestRoutedInfo>) => InternalTag { field: "name", value: "REQUEST_ROUTED" },
    UnknownTransaction(ErrorInfo<UnknownTransactionInfo>) => InternalTag { field: "name", value: "UNKNOWN_TRANSACTION" },
    InternalError(ErrorInfo<InternalErrorInfo>) => InternalTag { field: "name", value: "INTERNAL_ERROR" },
    TimeoutError => InternalTag { field: "name", value: "TIMEOUT_ERROR" },
});

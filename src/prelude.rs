pub use crate::codec::{DynamicValue, TaggedUnion};
pub use crate::{
    parse_response, AccessKeyPermission, BlockId, BlockReference, ChunkReference, CryptoHash,
    Finality, JsonRpcRequest, JsonRpcResponse, NullParams, QueryRequest, QueryResponseKind,
    RequestId, RpcError, RpcErrorKind, RpcMethod, RpcOutcome, RpcQueryRequest, RpcQueryResponse,
};

use crate::api::types::{
    AccessKeyList, AccessKeyView, AccountId, BlockHeight, BlockReference, CryptoHash, PublicKey,
};
use crate::{impl_tagged_union, YoctoNear};
use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

#[derive(new, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdParams {
    pub account_id: AccountId,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStateParams {
    pub account_id: AccountId,
    /// Only keys starting with this prefix are returned; empty for all.
    #[serde(rename = "prefix_base64")]
    #[serde_as(as = "Base64")]
    pub prefix: Vec<u8>,
    #[serde(default)]
    pub include_proof: bool,
}

#[derive(new, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewAccessKeyParams {
    pub account_id: AccountId,
    pub public_key: PublicKey,
}

#[serde_as]
#[derive(new, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallFunctionParams {
    pub account_id: AccountId,
    pub method_name: String,
    #[serde(rename = "args_base64")]
    #[serde_as(as = "Base64")]
    pub args: Vec<u8>,
}

/// What a `query` call looks at, tagged by `request_type`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryRequest {
    ViewAccount(AccountIdParams),
    ViewCode(AccountIdParams),
    ViewState(ViewStateParams),
    ViewAccessKey(ViewAccessKeyParams),
    ViewAccessKeyList(AccountIdParams),
    CallFunction(CallFunctionParams),
}

impl_tagged_union!(QueryRequest {
    ViewAccount(AccountIdParams) => InternalTag { field: "request_type", value: "view_account" },
    ViewCode(AccountIdParams) => InternalTag { field: "request_type", value: "view_code" },
    ViewState(ViewStateParams) => InternalTag { field: "request_type", value: "view_state" },
    ViewAccessKey(ViewAccessKeyParams) => InternalTag { field: "request_type", value: "view_access_key" },
    ViewAccessKeyList(AccountIdParams) => InternalTag { field: "request_type", value: "view_access_key_list" },
    CallFunction(CallFunctionParams) => InternalTag { field: "request_type", value: "call_function" },
});

/// `params` of the `query` method: the block selector and the request share one object.
#[derive(new, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcQueryRequest {
    #[serde(flatten)]
    pub block_reference: BlockReference,
    #[serde(flatten)]
    pub request: QueryRequest,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    #[serde_as(as = "YoctoNear")]
    pub amount: u128,
    #[serde_as(as = "YoctoNear")]
    pub locked: u128,
    pub code_hash: CryptoHash,
    pub storage_usage: u64,
    #[serde(default)]
    pub storage_paid_at: BlockHeight,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCodeView {
    #[serde(rename = "code_base64")]
    #[serde_as(as = "Base64")]
    pub code: Vec<u8>,
    pub hash: CryptoHash,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateItem {
    #[serde_as(as = "Base64")]
    pub key: Vec<u8>,
    #[serde_as(as = "Base64")]
    pub value: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStateResult {
    pub values: Vec<StateItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proof: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallResult {
    pub result: Vec<u8>,
    pub logs: Vec<String>,
}

/// The body of a `query` result. Nothing on the wire says which view it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryResponseKind {
    ViewAccount(AccountView),
    ViewCode(ContractCodeView),
    ViewState(ViewStateResult),
    CallResult(CallResult),
    AccessKey(AccessKeyView),
    AccessKeyList(AccessKeyList),
}

impl_tagged_union!(QueryResponseKind {
    ViewAccount(AccountView) => BareTyped,
    ViewCode(ContractCodeView) => BareTyped,
    ViewState(ViewStateResult) => BareTyped,
    CallResult(CallResult) => BareTyped,
    AccessKey(AccessKeyView) => BareTyped,
    AccessKeyList(AccessKeyList) => BareTyped,
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcQueryResponse {
    #[serde(flatten)]
    pub kind: QueryResponseKind,
    pub block_height: BlockHeight,
    pub block_hash: CryptoHash,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{AccessKeyPermission, Finality, JsonRpcResponse};
    use crate::codec::{FailureKind, TaggedUnion};
    use serde_json::json;

    #[test]
    fn test_call_function_request() {
        let json = json!({
            "request_type": "call_function",
            "finality": "final",
            "account_id": "wrap.near",
            "method_name": "ft_balance_of",
            "args_base64": "eyJhY2NvdW50X2lkIjoiYWxpY2UubmVhciJ9"
        });

        let request: RpcQueryRequest = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(request.block_reference, BlockReference::Finality(Finality::Final));
        assert_eq!(
            request.request,
            QueryRequest::CallFunction(CallFunctionParams::new(
                "wrap.near".into(),
                "ft_balance_of".into(),
                br#"{"account_id":"alice.near"}"#.to_vec(),
            ))
        );
        assert_eq!(serde_json::to_value(&request).unwrap(), json);
    }

    #[test]
    fn test_view_state_defaults() {
        let json = json!({
            "request_type": "view_state",
            "block_id": 100,
            "account_id": "guest-book.near",
            "prefix_base64": ""
        });

        let request: RpcQueryRequest = serde_json::from_value(json).unwrap();
        assert_eq!(
            request.request,
            QueryRequest::ViewState(ViewStateParams {
                account_id: "guest-book.near".into(),
                prefix: vec![],
                include_proof: false,
            })
        );
    }

    #[test]
    fn test_request_type_is_required() {
        let json = json!({ "finality": "final", "account_id": "a.near" });
        let err = serde_json::from_value::<RpcQueryRequest>(json).unwrap_err();

        assert!(err
            .to_string()
            .contains("could not decode any variant of QueryRequest"));
    }

    #[test]
    fn test_unknown_request_type() {
        let json = json!({
            "request_type": "view_everything",
            "finality": "final",
            "account_id": "a.near"
        });
        assert!(serde_json::from_value::<RpcQueryRequest>(json).is_err());
    }

    #[test]
    fn test_account_view_response() {
        let json = json!({
            "jsonrpc": "2.0",
            "id": "dontcare",
            "result": {
                "amount": "399992611103597728750000000",
                "locked": "0",
                "code_hash": "11111111111111111111111111111111",
                "storage_usage": 642,
                "storage_paid_at": 0,
                "block_height": 17795474,
                "block_hash": "9MjpcnwW3TSdzGweNfPbkx8M74q1XzUcT1PAN8G5bNDz"
            }
        });

        let response: JsonRpcResponse<RpcQueryResponse> = serde_json::from_value(json).unwrap();
        let result = response.into_result().unwrap();

        assert_eq!(result.block_height, 17795474);
        match result.kind {
            QueryResponseKind::ViewAccount(account) => {
                assert_eq!(account.amount, 399_992_611_103_597_728_750_000_000);
                assert_eq!(account.storage_usage, 642);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_access_key_response() {
        let json = json!({
            "nonce": 85,
            "permission": "FullAccess",
            "block_height": 19884918,
            "block_hash": "GGJQ8yjmo7aEoj8ZpAhGehnq9BSWFx4xswHYzDwwAP2n"
        });

        let response: RpcQueryResponse = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(
            response.kind,
            QueryResponseKind::AccessKey(AccessKeyView {
                nonce: 85,
                permission: AccessKeyPermission::FullAccess,
            })
        );
        assert_eq!(serde_json::to_value(&response).unwrap(), json);
    }

    #[test]
    fn test_call_result_response() {
        let json = json!({
            "result": [34, 49, 48, 34],
            "logs": [],
            "block_height": 1,
            "block_hash": "GGJQ8yjmo7aEoj8ZpAhGehnq9BSWFx4xswHYzDwwAP2n"
        });

        let response: RpcQueryResponse = serde_json::from_value(json).unwrap();
        assert_eq!(
            response.kind,
            QueryResponseKind::CallResult(CallResult {
                result: b"\"10\"".to_vec(),
                logs: vec![],
            })
        );
    }

    #[test]
    fn test_view_code_response() {
        let json = json!({
            "code_base64": "AGFzbQE=",
            "hash": "3Zs7WXkdCDWzjSLkw7BA6hE5jbQUGsMxh6FpqHzsjHXf",
            "block_height": 17814234,
            "block_hash": "GT1D8nweVQU1zyCUv8TWAKdEGMrdkB8xHhiDuQyoWLzS"
        });

        let response: RpcQueryResponse = serde_json::from_value(json.clone()).unwrap();
        match &response.kind {
            QueryResponseKind::ViewCode(view) => {
                assert_eq!(view.code, b"\0asm\x01".to_vec());
                assert_eq!(view.hash, "3Zs7WXkdCDWzjSLkw7BA6hE5jbQUGsMxh6FpqHzsjHXf".into());
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(serde_json::to_value(&response).unwrap(), json);
    }

    #[test]
    fn test_view_state_response() {
        let json = json!({
            "values": [{ "key": "U1RBVEU=", "value": "AQ==" }],
            "block_height": 17814234,
            "block_hash": "GT1D8nweVQU1zyCUv8TWAKdEGMrdkB8xHhiDuQyoWLzS"
        });

        let response: RpcQueryResponse = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(
            response.kind,
            QueryResponseKind::ViewState(ViewStateResult {
                values: vec![StateItem {
                    key: b"STATE".to_vec(),
                    value: vec![1],
                }],
                proof: vec![],
            })
        );
        assert_eq!(serde_json::to_value(&response).unwrap(), json);

        let with_proof = json!({ "values": [], "proof": ["AQ=="] });
        match QueryResponseKind::from_json(&with_proof).unwrap() {
            QueryResponseKind::ViewState(state) => assert_eq!(state.proof, ["AQ=="]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_failure_inside_key_list_is_located() {
        let json = json!({
            "keys": [
                {
                    "public_key": "ed25519:5BGSaf6YjVm7565VzWQHNxoyEjwr3jUpRJSGjREvU9dB",
                    "access_key": { "nonce": 3, "permission": "FullAccess" }
                },
                {
                    "public_key": "ed25519:HkXcZTs4WDBDr4s2Kpvd3ySmNT7XLWjRA2KqqmJPzBLD",
                    "access_key": { "nonce": "x", "permission": "FullAccess" }
                }
            ]
        });
        let err = QueryResponseKind::from_json(&json).unwrap_err();

        let list = &err.attempts()[5];
        assert_eq!(list.label, "AccessKeyList");
        assert_eq!(list.failure.kind, FailureKind::TypeMismatch);
        assert_eq!(list.failure.path.to_string(), "keys[1].access_key.nonce");
    }
}

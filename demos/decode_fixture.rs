//! Decodes a saved JSON-RPC response body and logs what it holds.
//!
//! ```sh
//! $ FIXTURE_PATH=demos/fixtures/view_account.json cargo run --example decode_fixture
//! $ FIXTURE_PATH=demos/fixtures/tx_unknown.json RPC_METHOD=tx cargo run --example decode_fixture
//! ```
#![allow(dead_code)]

use eyre::Result;
use near_rpc_rs::prelude::*;
use near_rpc_rs::{Error, QueryResponseKind, RpcTransactionError};
use tracing::*;

mod common;
use common::{init_tracing, Config};

fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let text = std::fs::read_to_string(&config.fixture_path)?;

    match config.method {
        RpcMethod::Query => {
            let response = parse_response::<RpcQueryResponse>(&text)?;
            debug!(id = ?response.id, "decoded query response");

            match response.into_result() {
                Ok(result) => log_query(&result),
                Err(Error::JsonRpc(error)) => log_rpc_error(config.method, &error),
                Err(err) => return Err(err.into()),
            }
        }
        method => {
            let response = parse_response::<DynamicValue>(&text)?;
            debug!(id = ?response.id, %method, "decoded response");

            match response.into_result() {
                Ok(result) => info!(%method, "result: {result:#?}"),
                Err(Error::JsonRpc(error)) => log_rpc_error(method, &error),
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(())
}

fn log_query(result: &RpcQueryResponse) {
    let view = match &result.kind {
        QueryResponseKind::ViewAccount(_) => "account",
        QueryResponseKind::ViewCode(_) => "contract code",
        QueryResponseKind::ViewState(_) => "contract state",
        QueryResponseKind::CallResult(_) => "function call result",
        QueryResponseKind::AccessKey(_) => "access key",
        QueryResponseKind::AccessKeyList(_) => "access key list",
    };

    info!(
        block_height = result.block_height,
        block_hash = %result.block_hash,
        view,
        "query result"
    );
    debug!("{:#?}", result.kind);
}

fn log_rpc_error(method: RpcMethod, error: &RpcError) {
    warn!(%method, code = error.code, error_message = %error.message, "node returned an error");

    let transactional = matches!(
        method,
        RpcMethod::Tx
            | RpcMethod::SendTx
            | RpcMethod::BroadcastTxCommit
            | RpcMethod::ExperimentalTxStatus
    );

    match error.handler_cause::<RpcTransactionError>() {
        Some(Ok(cause)) if transactional => warn!("transaction error: {cause:?}"),
        Some(Err(err)) if transactional => warn!("unrecognised transaction error: {err}"),
        _ => warn!("{:?}", error.kind),
    }
}

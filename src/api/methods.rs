use crate::Error;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Every JSON-RPC method exposed by a NEAR node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum RpcMethod {
    ExperimentalChanges,
    ExperimentalChangesInBlock,
    ExperimentalCongestionLevel,
    ExperimentalGenesisConfig,
    ExperimentalLightClientBlockProof,
    ExperimentalLightClientProof,
    ExperimentalMaintenanceWindows,
    ExperimentalProtocolConfig,
    ExperimentalReceipt,
    ExperimentalSplitStorageInfo,
    ExperimentalTxStatus,
    ExperimentalValidatorsOrdered,
    Block,
    BlockEffects,
    BroadcastTxAsync,
    BroadcastTxCommit,
    Changes,
    Chunk,
    ClientConfig,
    GasPrice,
    GenesisConfig,
    Health,
    LightClientProof,
    MaintenanceWindows,
    NetworkInfo,
    NextLightClientBlock,
    Query,
    SendTx,
    Status,
    Tx,
    Validators,
}

impl RpcMethod {
    pub const ALL: [RpcMethod; 31] = [
        Self::ExperimentalChanges,
        Self::ExperimentalChangesInBlock,
        Self::ExperimentalCongestionLevel,
        Self::ExperimentalGenesisConfig,
        Self::ExperimentalLightClientBlockProof,
        Self::ExperimentalLightClientProof,
        Self::ExperimentalMaintenanceWindows,
        Self::ExperimentalProtocolConfig,
        Self::ExperimentalReceipt,
        Self::ExperimentalSplitStorageInfo,
        Self::ExperimentalTxStatus,
        Self::ExperimentalValidatorsOrdered,
        Self::Block,
        Self::BlockEffects,
        Self::BroadcastTxAsync,
        Self::BroadcastTxCommit,
        Self::Changes,
        Self::Chunk,
        Self::ClientConfig,
        Self::GasPrice,
        Self::GenesisConfig,
        Self::Health,
        Self::LightClientProof,
        Self::MaintenanceWindows,
        Self::NetworkInfo,
        Self::NextLightClientBlock,
        Self::Query,
        Self::SendTx,
        Self::Status,
        Self::Tx,
        Self::Validators,
    ];

    pub fn as_method_name(&self) -> &'static str {
        match self {
            Self::ExperimentalChanges => "EXPERIMENTAL_changes",
            Self::ExperimentalChangesInBlock => "EXPERIMENTAL_changes_in_block",
            Self::ExperimentalCongestionLevel => "EXPERIMENTAL_congestion_level",
            Self::ExperimentalGenesisConfig => "EXPERIMENTAL_genesis_config",
            Self::ExperimentalLightClientBlockProof => "EXPERIMENTAL_light_client_block_proof",
            Self::ExperimentalLightClientProof => "EXPERIMENTAL_light_client_proof",
            Self::ExperimentalMaintenanceWindows => "EXPERIMENTAL_maintenance_windows",
            Self::ExperimentalProtocolConfig => "EXPERIMENTAL_protocol_config",
            Self::ExperimentalReceipt => "EXPERIMENTAL_receipt",
            Self::ExperimentalSplitStorageInfo => "EXPERIMENTAL_split_storage_info",
            Self::ExperimentalTxStatus => "EXPERIMENTAL_tx_status",
            Self::ExperimentalValidatorsOrdered => "EXPERIMENTAL_validators_ordered",
            Self::Block => "block",
            Self::BlockEffects => "block_effects",
            Self::BroadcastTxAsync => "broadcast_tx_async",
            Self::BroadcastTxCommit => "broadcast_tx_commit",
            Self::Changes => "changes",
            Self::Chunk => "chunk",
            Self::ClientConfig => "client_config",
            Self::GasPrice => "gas_price",
            Self::GenesisConfig => "genesis_config",
            Self::Health => "health",
            Self::LightClientProof => "light_client_proof",
            Self::MaintenanceWindows => "maintenance_windows",
            Self::NetworkInfo => "network_info",
            Self::NextLightClientBlock => "next_light_client_block",
            Self::Query => "query",
            Self::SendTx => "send_tx",
            Self::Status => "status",
            Self::Tx => "tx",
            Self::Validators => "validators",
        }
    }

    /// Deprecated or unstable methods, published under the `EXPERIMENTAL_` prefix.
    pub fn is_experimental(&self) -> bool {
        self.as_method_name().starts_with("EXPERIMENTAL_")
    }

    /// Methods whose `params` must be JSON `null`.
    pub fn takes_no_params(&self) -> bool {
        matches!(
            self,
            Self::Health
                | Self::Status
                | Self::NetworkInfo
                | Self::ClientConfig
                | Self::GenesisConfig
                | Self::ExperimentalGenesisConfig
        )
    }
}

impl Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_method_name())
    }
}

impl FromStr for RpcMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_method_name() == s)
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}

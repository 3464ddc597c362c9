use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

pub type AccountId = String;
pub type PublicKey = String;
pub type BlockHeight = u64;
pub type ShardId = u64;
pub type Nonce = u64;

/// Base58 encoded 32-byte hash of a block, chunk, transaction or contract.
#[derive(new, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CryptoHash(pub String);

impl Display for CryptoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CryptoHash {
    fn from(hash: &str) -> Self {
        Self(hash.to_string())
    }
}

mod rpc;

pub use rpc::*;

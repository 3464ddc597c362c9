use crate::api::types::{BlockId, CryptoHash, ShardId};
use crate::impl_tagged_union;
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(new, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockShardId {
    pub block_id: BlockId,
    pub shard_id: ShardId,
}

#[derive(new, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkHashId {
    pub chunk_id: CryptoHash,
}

/// Names a chunk either by its block and shard or by its own hash.
///
/// An object carrying both shapes decodes as [`ChunkReference::BlockShardId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChunkReference {
    BlockShardId(BlockShardId),
    ChunkHash(ChunkHashId),
}

impl_tagged_union!(ChunkReference {
    BlockShardId(BlockShardId) => BareTyped,
    ChunkHash(ChunkHashId) => BareTyped,
});

pub type RpcChunkRequest = ChunkReference;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{FailureKind, TaggedUnion};
    use serde_json::json;

    #[test]
    fn test_chunk_by_hash() {
        let json = json!({ "chunk_id": "EBM2qg5cGr47EjMPtH88uvmXHDHqmWPzKaQadbWhdw22" });
        let reference = ChunkReference::from_json(&json).unwrap();

        assert_eq!(
            reference,
            ChunkReference::ChunkHash(ChunkHashId::new(
                "EBM2qg5cGr47EjMPtH88uvmXHDHqmWPzKaQadbWhdw22".into()
            ))
        );
        assert_eq!(reference.to_json().unwrap(), json);
    }

    #[test]
    fn test_chunk_by_block_and_shard() {
        let json = json!({ "block_id": 58934027, "shard_id": 0 });
        assert_eq!(
            ChunkReference::from_json(&json).unwrap(),
            ChunkReference::BlockShardId(BlockShardId::new(BlockId::Height(58934027), 0))
        );
    }

    #[test]
    fn test_overlapping_object_takes_first_rule() {
        let json = json!({
            "block_id": "6RWmTYhXCzjMjoY3Mz1rfFcnBm8E6XeDDbFEPUA4sv1w",
            "shard_id": 2,
            "chunk_id": "EBM2qg5cGr47EjMPtH88uvmXHDHqmWPzKaQadbWhdw22"
        });

        assert!(matches!(
            ChunkReference::from_json(&json).unwrap(),
            ChunkReference::BlockShardId(BlockShardId { shard_id: 2, .. })
        ));
    }

    #[test]
    fn test_missing_shard_reports_both_rules() {
        let json = json!({ "block_id": 1 });
        let err = ChunkReference::from_json(&json).unwrap_err();

        let attempts = err.attempts();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].failure.kind, FailureKind::KeyNotFound);
        assert_eq!(attempts[1].failure.kind, FailureKind::KeyNotFound);
    }
}

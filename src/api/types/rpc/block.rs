use crate::api::types::{BlockHeight, CryptoHash};
use crate::impl_tagged_union;

/// How final a block must be before the node answers from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finality {
    Optimistic,
    NearFinal,
    Final,
}

impl_tagged_union!(Finality {
    Optimistic => BareScalar("optimistic"),
    NearFinal => BareScalar("near-final"),
    Final => BareScalar("final"),
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyncCheckpoint {
    Genesis,
    EarliestAvailable,
}

impl_tagged_union!(SyncCheckpoint {
    Genesis => BareScalar("genesis"),
    EarliestAvailable => BareScalar("earliest_available"),
});

/// A block named either by height or by hash.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockId {
    Height(BlockHeight),
    Hash(CryptoHash),
}

impl_tagged_union!(BlockId {
    Height(BlockHeight) => BareTyped,
    Hash(CryptoHash) => BareTyped,
});

/// Selects the block a request is answered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockReference {
    BlockId(BlockId),
    Finality(Finality),
    SyncCheckpoint(SyncCheckpoint),
}

impl_tagged_union!(BlockReference {
    BlockId(BlockId) => ExternalKey("block_id"),
    Finality(Finality) => ExternalKey("finality"),
    SyncCheckpoint(SyncCheckpoint) => ExternalKey("sync_checkpoint"),
});

pub type RpcBlockRequest = BlockReference;

impl From<BlockId> for BlockReference {
    fn from(block_id: BlockId) -> Self {
        Self::BlockId(block_id)
    }
}

impl From<Finality> for BlockReference {
    fn from(finality: Finality) -> Self {
        Self::Finality(finality)
    }
}

impl From<SyncCheckpoint> for BlockReference {
    fn from(checkpoint: SyncCheckpoint) -> Self {
        Self::SyncCheckpoint(checkpoint)
    }
}

impl From<BlockHeight> for BlockId {
    fn from(height: BlockHeight) -> Self {
        Self::Height(height)
    }
}

impl From<CryptoHash> for BlockId {
    fn from(hash: CryptoHash) -> Self {
        Self::Hash(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::TaggedUnion;
    use serde_json::json;

    #[test]
    fn test_finality_literals() {
        assert_eq!(
            Finality::from_json(&json!("near-final")).unwrap(),
            Finality::NearFinal
        );
        assert_eq!(Finality::Optimistic.to_json().unwrap(), json!("optimistic"));
        assert!(Finality::from_json(&json!("near_final")).is_err());
        assert!(Finality::from_json(&json!("Final")).is_err());
    }

    #[test]
    fn test_block_id_height_before_hash() {
        assert_eq!(BlockId::from_json(&json!(1024)).unwrap(), BlockId::Height(1024));
        assert_eq!(
            BlockId::from_json(&json!("6RWmTYhXCzjMjoY3Mz1rfFcnBm8E6XeDDbFEPUA4sv1w")).unwrap(),
            BlockId::Hash("6RWmTYhXCzjMjoY3Mz1rfFcnBm8E6XeDDbFEPUA4sv1w".into())
        );

        let err = BlockId::from_json(&json!(-1)).unwrap_err();
        assert_eq!(err.attempts().len(), 2);
    }

    #[test]
    fn test_block_reference_shapes() {
        let cases = [
            (BlockReference::from(BlockId::from(17_u64)), json!({ "block_id": 17 })),
            (BlockReference::from(Finality::Final), json!({ "finality": "final" })),
            (
                BlockReference::from(SyncCheckpoint::EarliestAvailable),
                json!({ "sync_checkpoint": "earliest_available" }),
            ),
        ];

        for (reference, json) in cases {
            assert_eq!(serde_json::to_value(&reference).unwrap(), json);
            assert_eq!(serde_json::from_value::<BlockReference>(json).unwrap(), reference);
        }
    }

    #[test]
    fn test_block_reference_report_lists_keys() {
        let err = BlockReference::from_json(&json!({ "height": 17 })).unwrap_err();

        assert_eq!(err.keys(), Some(&["height".to_string()][..]));
        assert!(err.to_string().contains("available keys: [height]"));
    }
}

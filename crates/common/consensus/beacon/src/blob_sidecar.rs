use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use serde_utils::HexBytes;

use crate::{
    beacon_block_header::SignedBeaconBlockHeader,
    polynomial_commitments::{KZGCommitment, KZGProof},
};

/// One entry of `/eth/v1/beacon/blob_sidecars/{block_id}`.
///
/// Early deneb releases flattened the block identity into the sidecar (`block_root`, `slot`,
/// `block_parent_root`, `proposer_index`); the final API nests it in `signed_block_header`.
/// Both shapes decode, with the fields of the other shape left as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobSidecarEntry {
    #[serde(with = "serde_utils::uint64_text")]
    pub index: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub kzg_commitment: KZGCommitment,
    #[serde(with = "serde_utils::hex_fixed")]
    pub kzg_proof: KZGProof,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob: Option<HexBytes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_block_header: Option<SignedBeaconBlockHeader>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_utils::hex_fixed::option_list"
    )]
    pub kzg_commitment_inclusion_proof: Option<Vec<B256>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_utils::hex_fixed::option"
    )]
    pub block_root: Option<B256>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_utils::uint64_text::option"
    )]
    pub slot: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_utils::hex_fixed::option"
    )]
    pub block_parent_root: Option<B256>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_utils::uint64_text::option"
    )]
    pub proposer_index: Option<u64>,
}

impl BlobSidecarEntry {
    /// Slot of the block carrying this blob, from whichever shape the node sent.
    pub fn block_slot(&self) -> Option<u64> {
        self.slot.or_else(|| {
            self.signed_block_header
                .as_ref()
                .map(|header| header.message.slot)
        })
    }

    pub fn block_proposer_index(&self) -> Option<u64> {
        self.proposer_index.or_else(|| {
            self.signed_block_header
                .as_ref()
                .map(|header| header.message.proposer_index)
        })
    }
}

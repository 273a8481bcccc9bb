use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::bls::BLSSignature;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBeaconBlockHeader {
    pub message: BeaconBlockHeader,
    #[serde(with = "serde_utils::hex_fixed")]
    pub signature: BLSSignature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BeaconBlockHeader {
    #[serde(with = "serde_utils::uint64_text")]
    pub slot: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub proposer_index: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub parent_root: B256,
    #[serde(with = "serde_utils::hex_fixed")]
    pub state_root: B256,
    #[serde(with = "serde_utils::hex_fixed")]
    pub body_root: B256,
}

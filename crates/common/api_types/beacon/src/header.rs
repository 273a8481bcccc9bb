use alloy_primitives::B256;
use explorer_consensus_beacon::beacon_block_header::SignedBeaconBlockHeader;
use serde::{Deserialize, Serialize};

/// One entry of `/eth/v1/beacon/headers` and `/eth/v1/beacon/headers/{block_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    #[serde(with = "serde_utils::hex_fixed")]
    pub root: B256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<bool>,
    pub header: SignedBeaconBlockHeader,
}

impl HeaderData {
    pub fn slot(&self) -> u64 {
        self.header.message.slot
    }

    pub fn parent_root(&self) -> B256 {
        self.header.message.parent_root
    }
}

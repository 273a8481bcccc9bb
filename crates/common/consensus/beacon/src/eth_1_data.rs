use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Eth1Data {
    #[serde(with = "serde_utils::hex_fixed")]
    pub deposit_root: B256,
    #[serde(with = "serde_utils::uint64_text")]
    pub deposit_count: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub block_hash: B256,
}

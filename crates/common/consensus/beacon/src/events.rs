use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Data of a `block` event from `/eth/v1/events?topics=block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEvent {
    #[serde(with = "serde_utils::uint64_text")]
    pub slot: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub block: B256,
    #[serde(default)]
    pub execution_optimistic: bool,
}

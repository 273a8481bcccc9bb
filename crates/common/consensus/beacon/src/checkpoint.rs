use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Checkpoint {
    #[serde(with = "serde_utils::uint64_text")]
    pub epoch: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub root: B256,
}

/// Payload of `/eth/v1/beacon/states/{state_id}/finality_checkpoints`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FinalityCheckpoints {
    pub previous_justified: Checkpoint,
    pub current_justified: Checkpoint,
    pub finalized: Checkpoint,
}

use serde::{Deserialize, Serialize};

/// Payload of `/eth/v1/node/syncing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SyncStatus {
    #[serde(with = "serde_utils::uint64_text")]
    pub head_slot: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub sync_distance: u64,
    pub is_syncing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_optimistic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub el_offline: Option<bool>,
}

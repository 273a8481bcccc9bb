use serde::{Deserialize, Serialize};

/// Payload of `/eth/v1/beacon/states/{state_id}/sync_committees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SyncCommittee {
    #[serde(with = "serde_utils::uint64_text::list")]
    pub validators: Vec<u64>,
    #[serde(with = "serde_utils::uint64_text::nested_list")]
    pub validator_aggregates: Vec<Vec<u64>>,
}

use serde::{Deserialize, Serialize};

/// One entry of `/eth/v1/beacon/states/{state_id}/committees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeEntry {
    #[serde(with = "serde_utils::uint64_text")]
    pub index: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub slot: u64,
    #[serde(with = "serde_utils::uint64_text::list")]
    pub validators: Vec<u64>,
}

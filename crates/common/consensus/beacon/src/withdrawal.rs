use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    #[serde(with = "serde_utils::uint64_text")]
    pub index: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub validator_index: u64,
    #[serde(with = "serde_utils::hex_address")]
    pub address: Address,
    /// Amount in Gwei.
    #[serde(with = "serde_utils::uint64_text")]
    pub amount: u64,
}

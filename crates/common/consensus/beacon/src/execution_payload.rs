use alloy_primitives::{Address, B256, FixedBytes};
use serde::{Deserialize, Serialize};
use serde_utils::HexBytes;

use crate::withdrawal::Withdrawal;

pub type LogsBloom = FixedBytes<256>;

/// Execution payload as embedded in bellatrix and later block bodies.
///
/// One type covers every fork: fields introduced after bellatrix are `Option` and decode to
/// `None` when the node omits them. Which of them must be present depends on the fork the
/// response declares, which is checked separately from decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPayload {
    // Execution block header fields
    #[serde(with = "serde_utils::hex_fixed")]
    pub parent_hash: B256,
    #[serde(with = "serde_utils::hex_address")]
    pub fee_recipient: Address,
    #[serde(with = "serde_utils::hex_fixed")]
    pub state_root: B256,
    #[serde(with = "serde_utils::hex_fixed")]
    pub receipts_root: B256,
    #[serde(with = "serde_utils::hex_fixed")]
    pub logs_bloom: LogsBloom,
    #[serde(with = "serde_utils::hex_fixed")]
    pub prev_randao: B256,
    #[serde(with = "serde_utils::uint64_text")]
    pub block_number: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub gas_limit: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub gas_used: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub timestamp: u64,
    pub extra_data: HexBytes,
    #[serde(with = "serde_utils::uint64_text")]
    pub base_fee_per_gas: u64,

    // Extra payload fields
    #[serde(with = "serde_utils::hex_fixed")]
    pub block_hash: B256,
    pub transactions: Vec<HexBytes>,

    // Capella
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawals: Option<Vec<Withdrawal>>,

    // Deneb
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_utils::uint64_text::option"
    )]
    pub blob_gas_used: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_utils::uint64_text::option"
    )]
    pub excess_blob_gas: Option<u64>,
}

impl ExecutionPayload {
    /// Sum of withdrawn amounts in Gwei, zero when the payload carries no withdrawals.
    pub fn total_withdrawal_amount(&self) -> u64 {
        self.withdrawals
            .iter()
            .flatten()
            .fold(0u64, |total, withdrawal| {
                total.saturating_add(withdrawal.amount)
            })
    }
}

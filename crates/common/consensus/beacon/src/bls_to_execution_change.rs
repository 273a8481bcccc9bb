use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::bls::{BLSSignature, PublicKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBLSToExecutionChange {
    pub message: BLSToExecutionChange,
    #[serde(with = "serde_utils::hex_fixed")]
    pub signature: BLSSignature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BLSToExecutionChange {
    #[serde(with = "serde_utils::uint64_text")]
    pub validator_index: u64,
    #[serde(rename = "from_bls_pubkey", with = "serde_utils::hex_fixed")]
    pub from_bls_public_key: PublicKey,
    #[serde(with = "serde_utils::hex_address")]
    pub to_execution_address: Address,
}

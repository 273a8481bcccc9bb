use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::bls::{BLSSignature, PublicKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    /// Merkle branch against the deposit root, 33 nodes on mainnet.
    #[serde(with = "serde_utils::hex_fixed::list")]
    pub proof: Vec<B256>,
    pub data: DepositData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositData {
    #[serde(with = "serde_utils::hex_fixed")]
    pub pubkey: PublicKey,
    #[serde(with = "serde_utils::hex_fixed")]
    pub withdrawal_credentials: B256,
    #[serde(with = "serde_utils::uint64_text")]
    pub amount: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub signature: BLSSignature,
}

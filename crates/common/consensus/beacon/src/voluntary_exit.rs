use serde::{Deserialize, Serialize};

use crate::bls::BLSSignature;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedVoluntaryExit {
    pub message: VoluntaryExit,
    #[serde(with = "serde_utils::hex_fixed")]
    pub signature: BLSSignature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoluntaryExit {
    #[serde(with = "serde_utils::uint64_text")]
    pub epoch: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub validator_index: u64,
}

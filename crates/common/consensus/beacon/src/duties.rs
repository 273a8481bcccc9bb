use serde::{Deserialize, Serialize};

use crate::bls::PublicKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposerDuty {
    #[serde(with = "serde_utils::hex_fixed")]
    pub pubkey: PublicKey,
    #[serde(with = "serde_utils::uint64_text")]
    pub validator_index: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub slot: u64,
}

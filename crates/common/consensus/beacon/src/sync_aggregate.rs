use serde::{Deserialize, Serialize};
use serde_utils::HexBytes;

use crate::{bitfield, bls::BLSSignature};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncAggregate {
    /// SSZ bitvector over the sync committee, kept packed.
    pub sync_committee_bits: HexBytes,
    #[serde(with = "serde_utils::hex_fixed")]
    pub sync_committee_signature: BLSSignature,
}

impl SyncAggregate {
    /// Share of the sync committee that signed. `committee_size` comes from the network
    /// configuration (`SYNC_COMMITTEE_SIZE`), it is not recoverable from the bits themselves.
    pub fn participation(&self, committee_size: u64) -> f64 {
        bitfield::sync_committee_participation(&self.sync_committee_bits, committee_size)
    }
}

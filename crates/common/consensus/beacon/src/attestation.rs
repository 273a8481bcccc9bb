use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use serde_utils::HexBytes;

use crate::{bitfield, bls::BLSSignature, checkpoint::Checkpoint};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct AttestationData {
    #[serde(with = "serde_utils::uint64_text")]
    pub slot: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub index: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub beacon_block_root: B256,
    pub source: Checkpoint,
    pub target: Checkpoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// SSZ bitlist, kept packed. See [`bitfield`] for interpreting it.
    pub aggregation_bits: HexBytes,
    pub data: AttestationData,
    #[serde(with = "serde_utils::hex_fixed")]
    pub signature: BLSSignature,
}

impl Attestation {
    /// Number of committee members whose bit is set, or `None` if the bitlist has no
    /// length delimiter.
    pub fn participant_count(&self) -> Option<usize> {
        let len = bitfield::bitlist_len(&self.aggregation_bits)?;
        Some(bitfield::count_set_bits(&self.aggregation_bits, len))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedAttestation {
    #[serde(with = "serde_utils::uint64_text::list")]
    pub attesting_indices: Vec<u64>,
    pub data: AttestationData,
    #[serde(with = "serde_utils::hex_fixed")]
    pub signature: BLSSignature,
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn attestation_json(aggregation_bits: &str) -> Value {
        let root = format!("0x{}", "ab".repeat(32));
        json!({
            "aggregation_bits": aggregation_bits,
            "data": {
                "slot": "100",
                "index": "3",
                "beacon_block_root": root,
                "source": { "epoch": "2", "root": root },
                "target": { "epoch": "3", "root": root },
            },
            "signature": format!("0x{}", "00".repeat(96)),
        })
    }

    #[test]
    fn keeps_aggregation_bits_packed() -> Result<(), serde_json::Error> {
        let attestation: Attestation = serde_json::from_value(attestation_json("0x0b"))?;

        assert_eq!(&*attestation.aggregation_bits, &[0x0b]);
        assert_eq!(attestation.data.slot, 100);
        assert_eq!(attestation.data.target.epoch, 3);
        // 0b0000_1011: delimiter at bit 3, bits 0 and 1 set.
        assert_eq!(attestation.participant_count(), Some(2));
        Ok(())
    }

    #[test]
    fn rejects_odd_length_bits() {
        assert!(serde_json::from_value::<Attestation>(attestation_json("0x0bc")).is_err());
    }
}

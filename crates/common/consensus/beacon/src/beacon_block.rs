use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::{
    attestation::Attestation, attester_slashing::AttesterSlashing, bls::BLSSignature,
    bls_to_execution_change::SignedBLSToExecutionChange, deposit::Deposit,
    eth_1_data::Eth1Data, execution_payload::ExecutionPayload,
    polynomial_commitments::KZGCommitment, proposer_slashing::ProposerSlashing,
    sync_aggregate::SyncAggregate, voluntary_exit::SignedVoluntaryExit,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBeaconBlock {
    pub message: BeaconBlock,
    #[serde(with = "serde_utils::hex_fixed")]
    pub signature: BLSSignature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlock {
    #[serde(with = "serde_utils::uint64_text")]
    pub slot: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub proposer_index: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub parent_root: B256,
    #[serde(with = "serde_utils::hex_fixed")]
    pub state_root: B256,
    pub body: BeaconBlockBody,
}

/// Block body covering phase0 through deneb.
///
/// Fields added by a later fork are `Option`. Decoding never requires them, see the fork
/// dispatch crate for checking a body against the fork its response declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlockBody {
    #[serde(with = "serde_utils::hex_fixed")]
    pub randao_reveal: BLSSignature,

    /// Eth1 data vote
    pub eth1_data: Eth1Data,

    /// Arbitrary data
    #[serde(with = "serde_utils::hex_fixed")]
    pub graffiti: B256,

    // Operations
    pub proposer_slashings: Vec<ProposerSlashing>,
    pub attester_slashings: Vec<AttesterSlashing>,
    pub attestations: Vec<Attestation>,
    pub deposits: Vec<Deposit>,
    pub voluntary_exits: Vec<SignedVoluntaryExit>,

    // Altair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_aggregate: Option<SyncAggregate>,

    // Bellatrix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_payload: Option<ExecutionPayload>,

    // Capella
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bls_to_execution_changes: Option<Vec<SignedBLSToExecutionChange>>,

    // Deneb
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_utils::hex_fixed::option_list"
    )]
    pub blob_kzg_commitments: Option<Vec<KZGCommitment>>,
}

impl BeaconBlockBody {
    /// Graffiti with trailing zero padding removed, decoded lossily as UTF-8.
    pub fn graffiti_text(&self) -> String {
        let end = self
            .graffiti
            .iter()
            .rposition(|byte| *byte != 0)
            .map_or(0, |position| position + 1);
        String::from_utf8_lossy(&self.graffiti[..end]).into_owned()
    }
}

//! Response types of the beacon API endpoints the indexer reads.

use explorer_consensus_beacon::{
    beacon_block::SignedBeaconBlock, blob_sidecar::BlobSidecarEntry,
    checkpoint::FinalityCheckpoints, committee::CommitteeEntry, duties::ProposerDuty,
    sync_committee::SyncCommittee, sync_status::SyncStatus,
    validator::{ValidatorBalance, ValidatorEntry},
};
use explorer_network_spec::chain_config::ChainConfig;

use crate::{
    header::HeaderData,
    responses::{DutiesResponse, ResponseEnvelope, RootData},
};

/// `/eth/v1/beacon/headers/{block_id}`
pub type HeaderResponse = ResponseEnvelope<HeaderData>;

/// `/eth/v1/beacon/headers`
pub type HeadersResponse = ResponseEnvelope<Vec<HeaderData>>;

/// `/eth/v1/beacon/states/{state_id}/finality_checkpoints`
pub type FinalityCheckpointsResponse = ResponseEnvelope<FinalityCheckpoints>;

/// `/eth/v1/validator/duties/proposer/{epoch}`
pub type ProposerDutiesResponse = DutiesResponse<ProposerDuty>;

/// `/eth/v1/beacon/states/{state_id}/committees`
pub type CommitteesResponse = ResponseEnvelope<Vec<CommitteeEntry>>;

/// `/eth/v1/beacon/states/{state_id}/sync_committees`
pub type SyncCommitteesResponse = ResponseEnvelope<SyncCommittee>;

/// `/eth/v2/beacon/blocks/{block_id}`
pub type BlockResponse = ResponseEnvelope<SignedBeaconBlock>;

/// `/eth/v1/beacon/blocks/{block_id}/root`
pub type BlockRootResponse = ResponseEnvelope<RootData>;

/// `/eth/v1/beacon/states/{state_id}/validators`
pub type ValidatorsResponse = ResponseEnvelope<Vec<ValidatorEntry>>;

/// `/eth/v1/beacon/states/{state_id}/validator_balances`
pub type ValidatorBalancesResponse = ResponseEnvelope<Vec<ValidatorBalance>>;

/// `/eth/v1/node/syncing`
pub type SyncingResponse = ResponseEnvelope<SyncStatus>;

/// `/eth/v1/beacon/blob_sidecars/{block_id}`
pub type BlobSidecarsResponse = ResponseEnvelope<Vec<BlobSidecarEntry>>;

/// `/eth/v1/config/spec`
pub type SpecResponse = ResponseEnvelope<ChainConfig>;

#[cfg(test)]
mod tests {
    use explorer_api_types_common::error::DecodeError;
    use explorer_consensus_beacon::fork::ForkName;
    use rstest::rstest;

    use super::*;
    use crate::responses::decode_response;

    #[rstest]
    #[case(r#"{"data": {"head_slot": "100", "sync_distance": "0", "is_syncing": false}}"#, None)]
    #[case(
        r#"{"data": {"head_slot": 100, "sync_distance": "0x0", "is_syncing": false, "is_optimistic": true, "el_offline": false}}"#,
        Some(true)
    )]
    fn decodes_syncing(
        #[case] body: &str,
        #[case] is_optimistic: Option<bool>,
    ) -> Result<(), DecodeError> {
        let response: SyncingResponse = decode_response(body.as_bytes())?;

        assert_eq!(response.data.head_slot, 100);
        assert_eq!(response.data.sync_distance, 0);
        assert_eq!(response.data.is_optimistic, is_optimistic);
        Ok(())
    }

    #[test]
    fn spec_response_resolves_forks() -> Result<(), DecodeError> {
        let body = r#"{"data": {
            "PRESET_BASE": "mainnet",
            "CONFIG_NAME": "mainnet",
            "SECONDS_PER_SLOT": "12",
            "SLOTS_PER_EPOCH": "32",
            "SYNC_COMMITTEE_SIZE": "512",
            "EPOCHS_PER_SYNC_COMMITTEE_PERIOD": "256",
            "GENESIS_FORK_VERSION": "0x00000000",
            "ALTAIR_FORK_VERSION": "0x01000000",
            "ALTAIR_FORK_EPOCH": "74240",
            "BELLATRIX_FORK_VERSION": "0x02000000",
            "BELLATRIX_FORK_EPOCH": "144896",
            "CAPELLA_FORK_VERSION": "0x03000000",
            "CAPELLA_FORK_EPOCH": "194048",
            "DENEB_FORK_VERSION": "0x04000000",
            "DENEB_FORK_EPOCH": "269568",
            "ELECTRA_FORK_VERSION": "0x05000000",
            "ELECTRA_FORK_EPOCH": "364032"
        }}"#;
        let response: SpecResponse = decode_response(body.as_bytes())?;

        assert_eq!(response.data, **explorer_network_spec::networks::MAINNET);
        assert_eq!(response.data.fork_at_slot(6209536), ForkName::Capella);
        Ok(())
    }

    #[test]
    fn block_root_response() -> Result<(), DecodeError> {
        let body = format!(
            r#"{{"execution_optimistic": false, "finalized": false, "data": {{"root": "0x{}"}}}}"#,
            "5a".repeat(32)
        );
        let response: BlockRootResponse = decode_response(body.as_bytes())?;

        assert_eq!(response.data.root, alloy_primitives::B256::repeat_byte(0x5a));
        Ok(())
    }
}

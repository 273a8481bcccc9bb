#![warn(clippy::unwrap_used)]

pub mod attestation;
pub mod attester_slashing;
pub mod beacon_block;
pub mod beacon_block_header;
pub mod bitfield;
pub mod blob_sidecar;
pub mod bls;
pub mod bls_to_execution_change;
pub mod checkpoint;
pub mod committee;
pub mod deposit;
pub mod duties;
pub mod eth_1_data;
pub mod events;
pub mod execution_payload;
pub mod fork;
pub mod polynomial_commitments;
pub mod proposer_slashing;
pub mod sync_aggregate;
pub mod sync_committee;
pub mod sync_status;
pub mod validator;
pub mod voluntary_exit;
pub mod withdrawal;

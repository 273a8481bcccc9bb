use explorer_consensus_beacon::{
    beacon_block::BeaconBlockBody, execution_payload::ExecutionPayload, fork::ForkName,
};

/// Block body fields introduced after phase0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyField {
    SyncAggregate,
    ExecutionPayload,
    BlsToExecutionChanges,
    BlobKzgCommitments,
}

impl BodyField {
    pub const ALL: [BodyField; 4] = [
        BodyField::SyncAggregate,
        BodyField::ExecutionPayload,
        BodyField::BlsToExecutionChanges,
        BodyField::BlobKzgCommitments,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BodyField::SyncAggregate => "sync_aggregate",
            BodyField::ExecutionPayload => "execution_payload",
            BodyField::BlsToExecutionChanges => "bls_to_execution_changes",
            BodyField::BlobKzgCommitments => "blob_kzg_commitments",
        }
    }

    pub fn introduced_in(&self) -> ForkName {
        match self {
            BodyField::SyncAggregate => ForkName::Altair,
            BodyField::ExecutionPayload => ForkName::Bellatrix,
            BodyField::BlsToExecutionChanges => ForkName::Capella,
            BodyField::BlobKzgCommitments => ForkName::Deneb,
        }
    }

    pub fn is_present(&self, body: &BeaconBlockBody) -> bool {
        match self {
            BodyField::SyncAggregate => body.sync_aggregate.is_some(),
            BodyField::ExecutionPayload => body.execution_payload.is_some(),
            BodyField::BlsToExecutionChanges => body.bls_to_execution_changes.is_some(),
            BodyField::BlobKzgCommitments => body.blob_kzg_commitments.is_some(),
        }
    }
}

/// Execution payload fields introduced after bellatrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadField {
    Withdrawals,
    BlobGasUsed,
    ExcessBlobGas,
}

impl PayloadField {
    pub const ALL: [PayloadField; 3] = [
        PayloadField::Withdrawals,
        PayloadField::BlobGasUsed,
        PayloadField::ExcessBlobGas,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PayloadField::Withdrawals => "withdrawals",
            PayloadField::BlobGasUsed => "blob_gas_used",
            PayloadField::ExcessBlobGas => "excess_blob_gas",
        }
    }

    pub fn introduced_in(&self) -> ForkName {
        match self {
            PayloadField::Withdrawals => ForkName::Capella,
            PayloadField::BlobGasUsed | PayloadField::ExcessBlobGas => ForkName::Deneb,
        }
    }

    pub fn is_present(&self, payload: &ExecutionPayload) -> bool {
        match self {
            PayloadField::Withdrawals => payload.withdrawals.is_some(),
            PayloadField::BlobGasUsed => payload.blob_gas_used.is_some(),
            PayloadField::ExcessBlobGas => payload.excess_blob_gas.is_some(),
        }
    }
}

/// Body fields a block of `fork` must carry, in order of introduction.
pub fn required_body_fields(fork: ForkName) -> impl Iterator<Item = BodyField> {
    BodyField::ALL
        .into_iter()
        .filter(move |field| fork.is_at_least(field.introduced_in()))
}

/// Payload fields an execution payload of `fork` must carry.
pub fn required_payload_fields(fork: ForkName) -> impl Iterator<Item = PayloadField> {
    PayloadField::ALL
        .into_iter()
        .filter(move |field| fork.is_at_least(field.introduced_in()))
}

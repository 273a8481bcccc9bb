use alloy_primitives::FixedBytes;

pub type KZGCommitment = FixedBytes<48>;

pub type KZGProof = FixedBytes<48>;

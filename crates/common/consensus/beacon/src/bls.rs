use alloy_primitives::FixedBytes;

/// Compressed BLS12-381 public key.
pub type PublicKey = FixedBytes<48>;

/// Compressed BLS12-381 signature.
pub type BLSSignature = FixedBytes<96>;

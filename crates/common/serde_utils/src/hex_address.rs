//! Execution-layer addresses as lowercase hex. Checksummed input is accepted, since hex digits
//! are matched case-insensitively.

use alloy_primitives::{Address, FixedBytes};
use serde::{Deserializer, Serializer};

use crate::{hex_bytes::encode_hex, hex_fixed};

pub fn serialize<S>(address: &Address, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&encode_hex(address.as_slice()))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    let bytes: FixedBytes<20> = hex_fixed::deserialize(deserializer)?;
    Ok(Address::from(bytes))
}

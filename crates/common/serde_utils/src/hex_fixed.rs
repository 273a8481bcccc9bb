//! Fixed-width byte values (roots, keys, signatures) carried as hex text.
//!
//! Decoding applies the [`decode_hex_bytes`](crate::decode_hex_bytes) rules first, then checks
//! the width. Usage: `#[serde(with = "hex_fixed")]` on any `FixedBytes<N>` field.

use alloy_primitives::FixedBytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    error::ScalarError,
    hex_bytes::{HexBytesVisitor, encode_hex},
};

pub fn to_fixed<const N: usize>(bytes: &[u8]) -> Result<FixedBytes<N>, ScalarError> {
    <[u8; N]>::try_from(bytes).map(FixedBytes::from).map_err(|_| {
        ScalarError::InvalidFormat(format!("expected {N} bytes, got {}", bytes.len()))
    })
}

pub fn serialize<S, const N: usize>(value: &FixedBytes<N>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&encode_hex(value.as_slice()))
}

pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<FixedBytes<N>, D::Error>
where
    D: Deserializer<'de>,
{
    let bytes = deserializer.deserialize_str(HexBytesVisitor)?;
    to_fixed(&bytes).map_err(de::Error::custom)
}

struct FixedHex<const N: usize>(FixedBytes<N>);

impl<const N: usize> Serialize for FixedHex<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(&self.0, serializer)
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedHex<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(Self)
    }
}

/// Usage: `#[serde(default, with = "hex_fixed::option")]`.
pub mod option {
    use super::{Deserialize, Deserializer, FixedBytes, FixedHex, Serialize, Serializer};

    pub fn serialize<S, const N: usize>(
        value: &Option<FixedBytes<N>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.map(FixedHex).serialize(serializer)
    }

    pub fn deserialize<'de, D, const N: usize>(
        deserializer: D,
    ) -> Result<Option<FixedBytes<N>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<FixedHex<N>>::deserialize(deserializer)?.map(|value| value.0))
    }
}

/// Usage: `#[serde(with = "hex_fixed::list")]` on a `Vec<FixedBytes<N>>`.
pub mod list {
    use super::{Deserialize, Deserializer, FixedBytes, FixedHex, Serializer};

    pub fn serialize<S, const N: usize>(
        values: &[FixedBytes<N>],
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(values.iter().copied().map(FixedHex))
    }

    pub fn deserialize<'de, D, const N: usize>(
        deserializer: D,
    ) -> Result<Vec<FixedBytes<N>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Vec::<FixedHex<N>>::deserialize(deserializer)?
            .into_iter()
            .map(|value| value.0)
            .collect())
    }
}

/// Usage: `#[serde(default, with = "hex_fixed::option_list")]` for fork-introduced lists.
pub mod option_list {
    use super::{Deserialize, Deserializer, FixedBytes, FixedHex, Serialize, Serializer};

    pub fn serialize<S, const N: usize>(
        values: &Option<Vec<FixedBytes<N>>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        values
            .as_ref()
            .map(|values| values.iter().copied().map(FixedHex).collect::<Vec<_>>())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D, const N: usize>(
        deserializer: D,
    ) -> Result<Option<Vec<FixedBytes<N>>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            Option::<Vec<FixedHex<N>>>::deserialize(deserializer)?
                .map(|values| values.into_iter().map(|value| value.0).collect()),
        )
    }
}

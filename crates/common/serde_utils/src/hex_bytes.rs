use std::{fmt, ops::Deref, str::FromStr};

use alloy_primitives::hex;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

use crate::error::ScalarError;

/// Decode a hex string with an optional `0x` prefix.
///
/// The remaining digits must have even length. An empty string (with or without the prefix)
/// decodes to an empty byte sequence, which is how e.g. an empty `extra_data` is sent.
pub fn decode_hex_bytes(input: &str) -> Result<Vec<u8>, ScalarError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);

    if digits.len() % 2 != 0 {
        return Err(ScalarError::InvalidFormat(format!(
            "odd-length hex string of {} digits",
            digits.len()
        )));
    }
    if let Some(position) = digits.bytes().position(|byte| !byte.is_ascii_hexdigit()) {
        return Err(ScalarError::InvalidFormat(format!(
            "invalid hex character at position {position}"
        )));
    }

    hex::decode(digits).map_err(|err| ScalarError::InvalidFormat(format!("invalid hex: {err}")))
}

/// Encode `data` as a lowercase, 0x-prefixed hex string.
pub fn encode_hex<T: AsRef<[u8]>>(data: T) -> String {
    hex::encode_prefixed(data)
}

pub struct HexBytesVisitor;

impl<'de> Visitor<'de> for HexBytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a hex string, optionally 0x-prefixed")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        decode_hex_bytes(value).map_err(de::Error::custom)
    }
}

/// Variable-length byte string carried as hex text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HexBytes(Vec<u8>);

impl HexBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for HexBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for HexBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<HexBytes> for Vec<u8> {
    fn from(bytes: HexBytes) -> Self {
        bytes.0
    }
}

impl FromStr for HexBytes {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex_bytes(s).map(Self)
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_hex(&self.0))
    }
}

impl Serialize for HexBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_hex(&self.0))
    }
}

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(HexBytesVisitor).map(Self)
    }
}

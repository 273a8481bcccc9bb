//! Unsigned 64-bit integers encoded as bare numbers or as (optionally quoted) text.
//!
//! Accepted forms:
//!
//! - a bare JSON number: `123`
//! - a string, optionally wrapped in a second layer of single or double quotes: `"123"`, `"'123'"`
//! - any of the above with a base prefix: `0x` (hex), `0o` or a leading `0` (octal), `0b` (binary)
//!
//! `_` is allowed as a separator between digits. Values are always serialized as a quoted decimal
//! string, as the beacon API sends them.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

use crate::error::ScalarError;

/// Decode a text-encoded `u64`.
///
/// Fails with [`ScalarError::InvalidFormat`] on empty input, on a leading quote without a
/// matching trailing quote, and on anything that is not an unsigned 64-bit integer in the base
/// implied by its prefix. Overflow is an error, never a wraparound.
pub fn decode_uint64_text(input: &str) -> Result<u64, ScalarError> {
    parse_uint_literal(strip_quotes(input)?)
}

fn strip_quotes(input: &str) -> Result<&str, ScalarError> {
    let Some(first) = input.chars().next() else {
        return Err(ScalarError::InvalidFormat("empty uint64 input".to_string()));
    };

    if first != '"' && first != '\'' {
        return Ok(input);
    }

    if input.len() == 1 || !input.ends_with(first) {
        return Err(ScalarError::InvalidFormat(format!(
            "uneven or missing quotes in {input:?}"
        )));
    }

    Ok(&input[1..input.len() - 1])
}

fn parse_uint_literal(literal: &str) -> Result<u64, ScalarError> {
    let invalid =
        || ScalarError::InvalidFormat(format!("{literal:?} is not an unsigned 64-bit integer"));

    let (radix, digits) = split_radix(literal);
    if digits.is_empty() || !underscores_ok(literal) {
        return Err(invalid());
    }

    let digits = if digits.contains('_') {
        Cow::Owned(digits.replace('_', ""))
    } else {
        Cow::Borrowed(digits)
    };

    // `from_str_radix` tolerates a leading `+`, a literal never does.
    if !digits.bytes().all(|byte| byte.is_ascii_alphanumeric()) {
        return Err(invalid());
    }

    u64::from_str_radix(&digits, radix).map_err(|_| invalid())
}

fn split_radix(literal: &str) -> (u32, &str) {
    match literal.as_bytes() {
        [b'0', prefix, ..] => match prefix.to_ascii_lowercase() {
            b'x' => (16, &literal[2..]),
            b'o' => (8, &literal[2..]),
            b'b' => (2, &literal[2..]),
            _ => (8, &literal[1..]),
        },
        _ => (10, literal),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Seen {
    Start,
    Digit,
    Underscore,
    Other,
}

/// Underscores must sit between two digits, where a base prefix counts as a digit.
fn underscores_ok(literal: &str) -> bool {
    if !literal.contains('_') {
        return true;
    }

    let bytes = literal.as_bytes();
    let (start, mut seen, hex) = match bytes {
        [b'0', prefix, ..] if matches!(prefix.to_ascii_lowercase(), b'b' | b'o' | b'x') => {
            (2, Seen::Digit, prefix.to_ascii_lowercase() == b'x')
        }
        _ => (0, Seen::Start, false),
    };

    for &byte in &bytes[start..] {
        if byte.is_ascii_digit() || (hex && byte.is_ascii_hexdigit()) {
            seen = Seen::Digit;
            continue;
        }
        if byte == b'_' {
            if seen != Seen::Digit {
                return false;
            }
            seen = Seen::Underscore;
            continue;
        }
        if seen == Seen::Underscore {
            return false;
        }
        seen = Seen::Other;
    }

    seen != Seen::Underscore
}

/// Visitor accepting every encoding a beacon node has been seen to emit for a `u64`.
pub struct Uint64TextVisitor;

impl<'de> Visitor<'de> for Uint64TextVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an unsigned 64-bit integer, bare or quoted")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value).map_err(|_| {
            de::Error::custom(ScalarError::InvalidFormat(format!(
                "{value} is not an unsigned 64-bit integer"
            )))
        })
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(de::Error::custom(ScalarError::InvalidFormat(format!(
            "{value} is not an unsigned 64-bit integer"
        ))))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        decode_uint64_text(value).map_err(de::Error::custom)
    }
}

/// Serialize as a quoted decimal string.
pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Deserialize from a bare number or any accepted text form.
pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(Uint64TextVisitor)
}

/// A `u64` that decodes from every accepted text form.
///
/// Composable where a `with` attribute is not, e.g. inside `Vec` or `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uint64Text(pub u64);

impl Uint64Text {
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl From<u64> for Uint64Text {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Uint64Text> for u64 {
    fn from(value: Uint64Text) -> Self {
        value.0
    }
}

impl FromStr for Uint64Text {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_uint64_text(s).map(Self)
    }
}

impl fmt::Display for Uint64Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Uint64Text {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Uint64Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(Self)
    }
}

/// Usage: `#[serde(default, with = "uint64_text::option")]`.
pub mod option {
    use super::{Deserialize, Deserializer, Serialize, Serializer, Uint64Text};

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.map(Uint64Text).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Uint64Text>::deserialize(deserializer)?.map(u64::from))
    }
}

/// Usage: `#[serde(with = "uint64_text::list")]` on a `Vec<u64>`.
pub mod list {
    use super::{Deserialize, Deserializer, Serializer, Uint64Text};

    pub fn serialize<S>(values: &[u64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(values.iter().copied().map(Uint64Text))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Vec::<Uint64Text>::deserialize(deserializer)?
            .into_iter()
            .map(u64::from)
            .collect())
    }
}

/// Usage: `#[serde(with = "uint64_text::nested_list")]` on a `Vec<Vec<u64>>`.
pub mod nested_list {
    use super::{Deserialize, Deserializer, Serializer, Uint64Text};

    pub fn serialize<S>(values: &[Vec<u64>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(values.iter().map(|inner| {
            inner
                .iter()
                .copied()
                .map(Uint64Text)
                .collect::<Vec<_>>()
        }))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<u64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Vec::<Vec<Uint64Text>>::deserialize(deserializer)?
            .into_iter()
            .map(|inner| inner.into_iter().map(u64::from).collect())
            .collect())
    }
}

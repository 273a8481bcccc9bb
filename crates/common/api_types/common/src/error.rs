use std::fmt;

use explorer_consensus_beacon::fork::{ForkName, ForkNameError};
use serde_json::error::Category;
use serde_utils::ScalarError;
use thiserror::Error;

/// Prefix of every leaf decoding failure raised through serde, see [`ScalarError`].
const INVALID_FORMAT_PREFIX: &str = "invalid format: ";
const MISSING_FIELD_PREFIX: &str = "missing field `";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("missing required field `{0}`")]
    MissingRequiredField(String),

    #[error("unknown version: {0:?}")]
    UnknownVersion(String),

    #[error("response does not declare a version")]
    MissingVersion,

    #[error("fork field violation: `{field}` {kind} {introduced}, declared fork is {fork}")]
    ForkFieldViolation {
        fork: ForkName,
        field: &'static str,
        introduced: ForkName,
        kind: ViolationKind,
    },

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required by the declared fork but absent.
    Missing,
    /// Present although the declared fork predates the field.
    Premature,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing => write!(f, "is required from"),
            ViolationKind::Premature => write!(f, "is not valid before"),
        }
    }
}

impl From<ScalarError> for DecodeError {
    fn from(err: ScalarError) -> Self {
        match err {
            ScalarError::InvalidFormat(message) => DecodeError::InvalidFormat(message),
        }
    }
}

impl From<ForkNameError> for DecodeError {
    fn from(err: ForkNameError) -> Self {
        match err {
            ForkNameError::Unknown(tag) => DecodeError::UnknownVersion(tag),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Io | Category::Syntax | Category::Eof => {
                DecodeError::MalformedBody(err.to_string())
            }
            Category::Data => {
                let message = err.to_string();
                if let Some((field, _)) = message
                    .strip_prefix(MISSING_FIELD_PREFIX)
                    .and_then(|rest| rest.split_once('`'))
                {
                    return DecodeError::MissingRequiredField(field.to_string());
                }
                DecodeError::InvalidFormat(
                    message
                        .strip_prefix(INVALID_FORMAT_PREFIX)
                        .unwrap_or(&message)
                        .to_string(),
                )
            }
        }
    }
}

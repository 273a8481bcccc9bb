use alloy_primitives::B256;
use explorer_api_types_common::{decode::decode_json, error::DecodeError};
use explorer_consensus_beacon::fork::ForkName;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::trace;

/// The envelope shared by beacon API responses.
///
/// # Example
/// {
///     "version": "deneb",
///     "execution_optimistic": false,
///     "finalized": true,
///     "data": json!(T)
/// }
///
/// Only `data` is required. Missing flags default to `false`, a missing `version` stays `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub execution_optimistic: bool,
    #[serde(default)]
    pub finalized: bool,
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            version: None,
            execution_optimistic: false,
            finalized: false,
            data,
        }
    }

    pub fn with_version(mut self, fork: ForkName) -> Self {
        self.version = Some(fork.to_string());
        self
    }

    /// The fork named by the `version` tag.
    pub fn fork(&self) -> Result<ForkName, DecodeError> {
        let tag = self.version.as_deref().ok_or(DecodeError::MissingVersion)?;
        Ok(tag.parse()?)
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// A DutiesResponse data struct used by the validator duties endpoints
///
/// # Example
/// {
///     "dependent_root": "0x...",
///     "execution_optimistic": false,
///     "data": [T]
/// }
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutiesResponse<T> {
    #[serde(with = "serde_utils::hex_fixed")]
    pub dependent_root: B256,
    #[serde(default)]
    pub execution_optimistic: bool,
    pub data: Vec<T>,
}

/// Payload of `/eth/v1/beacon/blocks/{block_id}/root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootData {
    #[serde(with = "serde_utils::hex_fixed")]
    pub root: B256,
}

/// Decode an enveloped response body whose `data` is a `T`.
pub fn decode_response<T: DeserializeOwned>(
    body: &[u8],
) -> Result<ResponseEnvelope<T>, DecodeError> {
    let response: ResponseEnvelope<T> = decode_json(body)?;
    trace!(
        version = response.version.as_deref().unwrap_or("none"),
        execution_optimistic = response.execution_optimistic,
        finalized = response.finalized,
        "Decoded response envelope"
    );
    Ok(response)
}

/// Decode a duties response body whose entries are `T`.
pub fn decode_duties<T: DeserializeOwned>(body: &[u8]) -> Result<DutiesResponse<T>, DecodeError> {
    let response: DutiesResponse<T> = decode_json(body)?;
    trace!(
        dependent_root = %response.dependent_root,
        duties = response.data.len(),
        "Decoded duties response"
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use serde_utils::Uint64Text;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn flags_default_to_false() -> Result<(), DecodeError> {
        let response: ResponseEnvelope<Uint64Text> = decode_response(br#"{"data": "7"}"#)?;

        assert_eq!(response, ResponseEnvelope::new(Uint64Text(7)));
        assert_eq!(response.fork(), Err(DecodeError::MissingVersion));
        Ok(())
    }

    #[test]
    #[traced_test]
    fn reads_version_and_flags() -> Result<(), DecodeError> {
        let response: ResponseEnvelope<Uint64Text> = decode_response(
            br#"{"version": "capella", "execution_optimistic": true, "finalized": true, "data": 1}"#,
        )?;

        assert!(response.execution_optimistic);
        assert!(response.finalized);
        assert_eq!(response.fork(), Ok(ForkName::Capella));
        assert!(logs_contain("version=\"capella\"") || logs_contain("version=capella"));
        Ok(())
    }

    #[test]
    fn unknown_version_is_reported_on_access() -> Result<(), DecodeError> {
        let response: ResponseEnvelope<Uint64Text> =
            decode_response(br#"{"version": "electra", "data": 1}"#)?;

        assert_eq!(
            response.fork(),
            Err(DecodeError::UnknownVersion("electra".to_string()))
        );
        Ok(())
    }

    #[test]
    fn data_is_required() {
        assert_eq!(
            decode_response::<Uint64Text>(br#"{"finalized": true}"#),
            Err(DecodeError::MissingRequiredField("data".to_string()))
        );
    }

    #[test]
    fn data_failure_propagates_unchanged() {
        assert!(matches!(
            decode_response::<Uint64Text>(br#"{"data": "-1"}"#),
            Err(DecodeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn decodes_duties() -> Result<(), DecodeError> {
        let body = format!(
            r#"{{"dependent_root": "0x{}", "data": ["1", "0x2"]}}"#,
            "ab".repeat(32)
        );
        let duties: DutiesResponse<Uint64Text> = decode_duties(body.as_bytes())?;

        assert_eq!(duties.dependent_root, B256::repeat_byte(0xab));
        assert!(!duties.execution_optimistic);
        assert_eq!(duties.data, vec![Uint64Text(1), Uint64Text(2)]);
        Ok(())
    }
}

use explorer_api_types_beacon::endpoints::BlockResponse;
use explorer_api_types_common::error::{DecodeError, ViolationKind};
use explorer_consensus_beacon::{
    beacon_block::BeaconBlockBody, execution_payload::ExecutionPayload, fork::ForkName,
};
use tracing::debug;

use crate::fields::{BodyField, PayloadField};

/// A policy deciding whether a decoded block body is consistent with a fork.
pub trait BlockBodyValidator {
    fn validate_body(&self, fork: ForkName, body: &BeaconBlockBody) -> Result<(), DecodeError>;

    /// Validate a `/eth/v2/beacon/blocks` response against its own `version` tag.
    ///
    /// Returns the declared fork on success.
    fn validate_block_response(&self, response: &BlockResponse) -> Result<ForkName, DecodeError> {
        let fork = response.fork()?;
        self.validate_body(fork, &response.data.message.body)?;
        Ok(fork)
    }
}

/// Requires every field the fork introduced and rejects any field introduced later, in both
/// the block body and its execution payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForkDispatch;

impl ForkDispatch {
    fn check(
        fork: ForkName,
        field: &'static str,
        introduced: ForkName,
        present: bool,
    ) -> Result<(), DecodeError> {
        let kind = match (fork.is_at_least(introduced), present) {
            (true, false) => ViolationKind::Missing,
            (false, true) => ViolationKind::Premature,
            _ => return Ok(()),
        };

        debug!(%fork, field, %introduced, ?kind, "Rejecting block body");
        Err(DecodeError::ForkFieldViolation {
            fork,
            field,
            introduced,
            kind,
        })
    }

    pub fn validate_payload(
        &self,
        fork: ForkName,
        payload: &ExecutionPayload,
    ) -> Result<(), DecodeError> {
        PayloadField::ALL.iter().try_for_each(|field| {
            Self::check(
                fork,
                field.name(),
                field.introduced_in(),
                field.is_present(payload),
            )
        })
    }
}

impl BlockBodyValidator for ForkDispatch {
    fn validate_body(&self, fork: ForkName, body: &BeaconBlockBody) -> Result<(), DecodeError> {
        BodyField::ALL.iter().try_for_each(|field| {
            Self::check(
                fork,
                field.name(),
                field.introduced_in(),
                field.is_present(body),
            )
        })?;

        match &body.execution_payload {
            Some(payload) => self.validate_payload(fork, payload),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use explorer_api_types_beacon::responses::ResponseEnvelope;
    use explorer_consensus_beacon::beacon_block::SignedBeaconBlock;
    use rstest::rstest;
    use serde_json::{Value, json};
    use tracing_test::traced_test;

    use super::*;

    fn hex(byte: &str, len: usize) -> String {
        format!("0x{}", byte.repeat(len))
    }

    fn payload(fork: ForkName) -> Value {
        let mut payload = json!({
            "parent_hash": hex("01", 32),
            "fee_recipient": hex("02", 20),
            "state_root": hex("03", 32),
            "receipts_root": hex("04", 32),
            "logs_bloom": hex("00", 256),
            "prev_randao": hex("05", 32),
            "block_number": "17000000",
            "gas_limit": "30000000",
            "gas_used": "12000000",
            "timestamp": "1681338455",
            "extra_data": "0x",
            "base_fee_per_gas": "25000000000",
            "block_hash": hex("06", 32),
            "transactions": [],
        });
        if fork.is_at_least(ForkName::Capella) {
            payload["withdrawals"] = json!([]);
        }
        if fork.is_at_least(ForkName::Deneb) {
            payload["blob_gas_used"] = json!("131072");
            payload["excess_blob_gas"] = json!("0");
        }
        payload
    }

    fn body(fork: ForkName) -> Value {
        let mut body = json!({
            "randao_reveal": hex("aa", 96),
            "eth1_data": {
                "deposit_root": hex("01", 32),
                "deposit_count": "1",
                "block_hash": hex("02", 32),
            },
            "graffiti": hex("00", 32),
            "proposer_slashings": [],
            "attester_slashings": [],
            "attestations": [],
            "deposits": [],
            "voluntary_exits": [],
        });
        if fork.is_at_least(ForkName::Altair) {
            body["sync_aggregate"] = json!({
                "sync_committee_bits": hex("ff", 64),
                "sync_committee_signature": hex("bb", 96),
            });
        }
        if fork.is_at_least(ForkName::Bellatrix) {
            body["execution_payload"] = payload(fork);
        }
        if fork.is_at_least(ForkName::Capella) {
            body["bls_to_execution_changes"] = json!([]);
        }
        if fork.is_at_least(ForkName::Deneb) {
            body["blob_kzg_commitments"] = json!([]);
        }
        body
    }

    fn decode_body(body: Value) -> BeaconBlockBody {
        serde_json::from_value(body).expect("test body must decode")
    }

    #[rstest]
    #[case(ForkName::Phase0)]
    #[case(ForkName::Altair)]
    #[case(ForkName::Bellatrix)]
    #[case(ForkName::Capella)]
    #[case(ForkName::Deneb)]
    fn accepts_matching_body(#[case] fork: ForkName) {
        assert_eq!(ForkDispatch.validate_body(fork, &decode_body(body(fork))), Ok(()));
    }

    #[test]
    #[traced_test]
    fn deneb_body_without_commitments_is_rejected() {
        let mut raw = body(ForkName::Deneb);
        if let Some(fields) = raw.as_object_mut() {
            fields.remove("blob_kzg_commitments");
        }
        // Raw decoding stays permissive.
        let decoded = decode_body(raw);

        assert_eq!(
            ForkDispatch.validate_body(ForkName::Deneb, &decoded),
            Err(DecodeError::ForkFieldViolation {
                fork: ForkName::Deneb,
                field: "blob_kzg_commitments",
                introduced: ForkName::Deneb,
                kind: ViolationKind::Missing,
            })
        );
        assert!(logs_contain("Rejecting block body"));
        assert!(logs_contain("blob_kzg_commitments"));
    }

    #[test]
    fn later_fork_field_is_premature() {
        let decoded = decode_body(body(ForkName::Capella));

        assert_eq!(
            ForkDispatch.validate_body(ForkName::Bellatrix, &decoded),
            Err(DecodeError::ForkFieldViolation {
                fork: ForkName::Bellatrix,
                field: "bls_to_execution_changes",
                introduced: ForkName::Capella,
                kind: ViolationKind::Premature,
            })
        );
    }

    #[test]
    fn checks_payload_fields() {
        let mut raw = body(ForkName::Capella);
        raw["execution_payload"]["blob_gas_used"] = json!("0");

        assert_eq!(
            ForkDispatch.validate_body(ForkName::Capella, &decode_body(raw)),
            Err(DecodeError::ForkFieldViolation {
                fork: ForkName::Capella,
                field: "blob_gas_used",
                introduced: ForkName::Deneb,
                kind: ViolationKind::Premature,
            })
        );

        let mut raw = body(ForkName::Capella);
        if let Some(payload) = raw["execution_payload"].as_object_mut() {
            payload.remove("withdrawals");
        }
        assert!(matches!(
            ForkDispatch.validate_body(ForkName::Capella, &decode_body(raw)),
            Err(DecodeError::ForkFieldViolation { field: "withdrawals", .. })
        ));
    }

    fn block_response(version: Option<&str>, fork: ForkName) -> BlockResponse {
        let block: SignedBeaconBlock = serde_json::from_value(json!({
            "message": {
                "slot": "8626176",
                "proposer_index": "1",
                "parent_root": hex("0a", 32),
                "state_root": hex("0b", 32),
                "body": body(fork),
            },
            "signature": hex("0c", 96),
        }))
        .expect("test block must decode");
        ResponseEnvelope {
            version: version.map(str::to_string),
            ..ResponseEnvelope::new(block)
        }
    }

    #[test]
    fn validates_against_declared_version() {
        let response = block_response(Some("deneb"), ForkName::Deneb);
        assert_eq!(
            ForkDispatch.validate_block_response(&response),
            Ok(ForkName::Deneb)
        );

        let response = block_response(Some("capella"), ForkName::Deneb);
        assert!(matches!(
            ForkDispatch.validate_block_response(&response),
            Err(DecodeError::ForkFieldViolation { kind: ViolationKind::Premature, .. })
        ));
    }

    #[rstest]
    #[case(Some("electra"), DecodeError::UnknownVersion("electra".to_string()))]
    #[case(None, DecodeError::MissingVersion)]
    fn rejects_unusable_version(#[case] version: Option<&str>, #[case] expected: DecodeError) {
        let response = block_response(version, ForkName::Deneb);
        assert_eq!(ForkDispatch.validate_block_response(&response), Err(expected));
    }

    /// A policy that tolerates nodes sending later-fork fields early.
    struct MissingOnly;

    impl BlockBodyValidator for MissingOnly {
        fn validate_body(
            &self,
            fork: ForkName,
            body: &BeaconBlockBody,
        ) -> Result<(), DecodeError> {
            let missing =
                crate::fields::required_body_fields(fork).find(|field| !field.is_present(body));
            match missing {
                Some(field) => Err(DecodeError::ForkFieldViolation {
                    fork,
                    field: field.name(),
                    introduced: field.introduced_in(),
                    kind: ViolationKind::Missing,
                }),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn validators_are_swappable() {
        let response = block_response(Some("capella"), ForkName::Deneb);
        assert_eq!(MissingOnly.validate_block_response(&response), Ok(ForkName::Capella));
    }
}

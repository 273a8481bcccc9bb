mod common;

use common::{read_asset, read_json_file};
use explorer_api_types_beacon::{endpoints::BlockResponse, responses::decode_response};
use explorer_api_types_common::error::{DecodeError, ViolationKind};
use explorer_consensus_beacon::fork::ForkName;
use explorer_fork_dispatch::{
    resolve::resolve_block_fork,
    validator::{BlockBodyValidator, ForkDispatch},
};
use explorer_network_spec::networks::MAINNET;
use rstest::rstest;

#[rstest]
#[case("block_phase0.json", ForkName::Phase0)]
#[case("block_altair.json", ForkName::Altair)]
#[case("block_bellatrix.json", ForkName::Bellatrix)]
#[case("block_capella.json", ForkName::Capella)]
#[case("block_deneb.json", ForkName::Deneb)]
fn test_block_matches_declared_fork(
    #[case] file_name: &str,
    #[case] expected: ForkName,
) -> anyhow::Result<()> {
    let block: BlockResponse = decode_response(&read_asset(file_name)?)?;

    assert_eq!(ForkDispatch.validate_block_response(&block)?, expected);
    // The slots in the fixtures fall inside their fork on mainnet.
    assert_eq!(MAINNET.fork_at_slot(block.data.message.slot), expected);

    Ok(())
}

#[test]
fn test_deneb_block_without_blob_commitments() -> anyhow::Result<()> {
    let mut json = read_json_file("block_deneb.json")?;
    json["data"]["message"]["body"]
        .as_object_mut()
        .and_then(|body| body.remove("blob_kzg_commitments"))
        .ok_or_else(|| anyhow::anyhow!("fixture has no blob_kzg_commitments"))?;

    let block: BlockResponse = decode_response(&serde_json::to_vec(&json)?)?;
    assert!(block.data.message.body.blob_kzg_commitments.is_none());

    assert_eq!(
        ForkDispatch.validate_block_response(&block),
        Err(DecodeError::ForkFieldViolation {
            fork: ForkName::Deneb,
            field: "blob_kzg_commitments",
            introduced: ForkName::Deneb,
            kind: ViolationKind::Missing,
        })
    );

    Ok(())
}

#[test]
fn test_capella_version_on_deneb_body() -> anyhow::Result<()> {
    let mut json = read_json_file("block_deneb.json")?;
    json["version"] = "capella".into();

    let block: BlockResponse = decode_response(&serde_json::to_vec(&json)?)?;

    assert!(matches!(
        ForkDispatch.validate_block_response(&block),
        Err(DecodeError::ForkFieldViolation {
            kind: ViolationKind::Premature,
            introduced: ForkName::Deneb,
            ..
        })
    ));

    Ok(())
}

#[rstest]
#[case("electra", DecodeError::UnknownVersion("electra".to_string()))]
#[case("", DecodeError::UnknownVersion(String::new()))]
fn test_unknown_version_tag(
    #[case] version: &str,
    #[case] expected: DecodeError,
) -> anyhow::Result<()> {
    let mut json = read_json_file("block_capella.json")?;
    json["version"] = version.into();

    let block: BlockResponse = decode_response(&serde_json::to_vec(&json)?)?;
    assert_eq!(ForkDispatch.validate_block_response(&block), Err(expected));

    Ok(())
}

#[test]
fn test_missing_version_falls_back_to_slot() -> anyhow::Result<()> {
    let mut json = read_json_file("block_bellatrix.json")?;
    json.as_object_mut()
        .and_then(|response| response.remove("version"))
        .ok_or_else(|| anyhow::anyhow!("fixture has no version"))?;

    let block: BlockResponse = decode_response(&serde_json::to_vec(&json)?)?;
    assert_eq!(
        ForkDispatch.validate_block_response(&block),
        Err(DecodeError::MissingVersion)
    );

    let fork = resolve_block_fork(&block, &MAINNET)?;
    assert_eq!(fork, ForkName::Bellatrix);
    ForkDispatch.validate_body(fork, &block.data.message.body)?;

    Ok(())
}

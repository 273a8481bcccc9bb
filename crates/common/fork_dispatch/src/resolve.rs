use explorer_api_types_beacon::endpoints::BlockResponse;
use explorer_api_types_common::error::DecodeError;
use explorer_consensus_beacon::fork::ForkName;
use explorer_network_spec::chain_config::ChainConfig;
use tracing::trace;

/// The fork a block belongs to.
///
/// A declared `version` wins and must be a known fork. Without one the fork is looked up in
/// `config` from the block slot.
pub fn resolve_fork(
    version: Option<&str>,
    slot: u64,
    config: &ChainConfig,
) -> Result<ForkName, DecodeError> {
    match version {
        Some(tag) => Ok(tag.parse()?),
        None => {
            let fork = config.fork_at_slot(slot);
            trace!(slot, %fork, config = %config.config_name, "Resolved fork from slot");
            Ok(fork)
        }
    }
}

pub fn resolve_block_fork(
    response: &BlockResponse,
    config: &ChainConfig,
) -> Result<ForkName, DecodeError> {
    resolve_fork(
        response.version.as_deref(),
        response.data.message.slot,
        config,
    )
}

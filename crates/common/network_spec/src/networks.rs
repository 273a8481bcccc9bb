use std::sync::{Arc, LazyLock};

use alloy_primitives::fixed_bytes;

use crate::{chain_config::ChainConfig, fork_schedule::FAR_FUTURE_EPOCH};

pub static MAINNET: LazyLock<Arc<ChainConfig>> = LazyLock::new(|| {
    ChainConfig {
        preset_base: "mainnet".to_string(),
        config_name: "mainnet".to_string(),
        seconds_per_slot: 12,
        slots_per_epoch: 32,
        sync_committee_size: 512,
        epochs_per_sync_committee_period: 256,
        genesis_fork_version: fixed_bytes!("0x00000000"),
        altair_fork_version: fixed_bytes!("0x01000000"),
        altair_fork_epoch: 74240,
        bellatrix_fork_version: fixed_bytes!("0x02000000"),
        bellatrix_fork_epoch: 144896,
        capella_fork_version: fixed_bytes!("0x03000000"),
        capella_fork_epoch: 194048,
        deneb_fork_version: fixed_bytes!("0x04000000"),
        deneb_fork_epoch: 269568,
    }
    .into()
});

/// The minimal preset as shipped in the consensus-spec configs, with no fork past genesis
/// scheduled.
pub static MINIMAL: LazyLock<Arc<ChainConfig>> = LazyLock::new(|| {
    ChainConfig {
        preset_base: "minimal".to_string(),
        config_name: "minimal".to_string(),
        seconds_per_slot: 6,
        slots_per_epoch: 8,
        sync_committee_size: 32,
        epochs_per_sync_committee_period: 8,
        genesis_fork_version: fixed_bytes!("0x00000001"),
        altair_fork_version: fixed_bytes!("0x01000001"),
        altair_fork_epoch: FAR_FUTURE_EPOCH,
        bellatrix_fork_version: fixed_bytes!("0x02000001"),
        bellatrix_fork_epoch: FAR_FUTURE_EPOCH,
        capella_fork_version: fixed_bytes!("0x03000001"),
        capella_fork_epoch: FAR_FUTURE_EPOCH,
        deneb_fork_version: fixed_bytes!("0x04000001"),
        deneb_fork_epoch: FAR_FUTURE_EPOCH,
    }
    .into()
});

use std::{fs, path::Path};

use alloy_primitives::aliases::B32;
use anyhow::Context;
use explorer_consensus_beacon::{fork::ForkName, sync_aggregate::SyncAggregate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::fork_schedule::{ForkSchedule, ScheduledFork};

/// Values fixed by a preset rather than by the network config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetValues {
    pub slots_per_epoch: u64,
    pub sync_committee_size: u64,
    pub epochs_per_sync_committee_period: u64,
}

impl PresetValues {
    pub const MAINNET: PresetValues = PresetValues {
        slots_per_epoch: 32,
        sync_committee_size: 512,
        epochs_per_sync_committee_period: 256,
    };

    pub const MINIMAL: PresetValues = PresetValues {
        slots_per_epoch: 8,
        sync_committee_size: 32,
        epochs_per_sync_committee_period: 8,
    };

    pub fn for_preset_base(preset_base: &str) -> Option<PresetValues> {
        match preset_base {
            "mainnet" => Some(PresetValues::MAINNET),
            "minimal" => Some(PresetValues::MINIMAL),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainConfigError {
    #[error("{field} is not set and preset base {preset_base:?} has no built-in value")]
    MissingPresetValue {
        field: &'static str,
        preset_base: String,
    },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// The subset of a consensus network configuration the decoding layer needs.
///
/// Deserializes from a consensus-spec YAML config (where preset values may be left out and are
/// filled in from `PRESET_BASE`) and from the `/eth/v1/config/spec` response, which quotes every
/// integer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "RawChainConfig")]
pub struct ChainConfig {
    pub preset_base: String,
    pub config_name: String,

    // Time parameters
    #[serde(with = "serde_utils::uint64_text")]
    pub seconds_per_slot: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub slots_per_epoch: u64,

    // Sync committee
    #[serde(with = "serde_utils::uint64_text")]
    pub sync_committee_size: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub epochs_per_sync_committee_period: u64,

    // Forking
    #[serde(with = "serde_utils::hex_fixed")]
    pub genesis_fork_version: B32,
    #[serde(with = "serde_utils::hex_fixed")]
    pub altair_fork_version: B32,
    #[serde(with = "serde_utils::uint64_text")]
    pub altair_fork_epoch: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub bellatrix_fork_version: B32,
    #[serde(with = "serde_utils::uint64_text")]
    pub bellatrix_fork_epoch: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub capella_fork_version: B32,
    #[serde(with = "serde_utils::uint64_text")]
    pub capella_fork_epoch: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    pub deneb_fork_version: B32,
    #[serde(with = "serde_utils::uint64_text")]
    pub deneb_fork_epoch: u64,
}

impl ChainConfig {
    pub fn from_yaml_str(contents: &str) -> anyhow::Result<Self> {
        let config: ChainConfig =
            serde_yaml::from_str(contents).context("Failed to parse chain config YAML")?;
        debug!(
            config_name = %config.config_name,
            preset_base = %config.preset_base,
            "Parsed chain config"
        );
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read chain config from {}", path.display()))?;
        let config = Self::from_yaml_str(&contents)?;
        info!(
            "Loaded chain config {} from {}",
            config.config_name,
            path.display()
        );
        Ok(config)
    }

    pub fn fork_schedule(&self) -> ForkSchedule {
        ForkSchedule::new([
            ScheduledFork {
                name: ForkName::Phase0,
                version: self.genesis_fork_version,
                epoch: 0,
            },
            ScheduledFork {
                name: ForkName::Altair,
                version: self.altair_fork_version,
                epoch: self.altair_fork_epoch,
            },
            ScheduledFork {
                name: ForkName::Bellatrix,
                version: self.bellatrix_fork_version,
                epoch: self.bellatrix_fork_epoch,
            },
            ScheduledFork {
                name: ForkName::Capella,
                version: self.capella_fork_version,
                epoch: self.capella_fork_epoch,
            },
            ScheduledFork {
                name: ForkName::Deneb,
                version: self.deneb_fork_version,
                epoch: self.deneb_fork_epoch,
            },
        ])
    }

    /// A config with zero `slots_per_epoch` places every slot in epoch 0.
    pub fn epoch_at_slot(&self, slot: u64) -> u64 {
        slot.checked_div(self.slots_per_epoch).unwrap_or(0)
    }

    pub fn fork_at_epoch(&self, epoch: u64) -> ForkName {
        self.fork_schedule().fork_at_epoch(epoch)
    }

    /// Fork a block at `slot` belongs to, for responses that carry no `version` tag.
    pub fn fork_at_slot(&self, slot: u64) -> ForkName {
        self.fork_at_epoch(self.epoch_at_slot(slot))
    }

    pub fn sync_committee_participation(&self, sync_aggregate: &SyncAggregate) -> f64 {
        sync_aggregate.participation(self.sync_committee_size)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "UPPERCASE")]
struct RawChainConfig {
    preset_base: String,
    #[serde(default)]
    config_name: Option<String>,
    #[serde(with = "serde_utils::uint64_text")]
    seconds_per_slot: u64,
    #[serde(default, with = "serde_utils::uint64_text::option")]
    slots_per_epoch: Option<u64>,
    #[serde(default, with = "serde_utils::uint64_text::option")]
    sync_committee_size: Option<u64>,
    #[serde(default, with = "serde_utils::uint64_text::option")]
    epochs_per_sync_committee_period: Option<u64>,
    #[serde(with = "serde_utils::hex_fixed")]
    genesis_fork_version: B32,
    #[serde(with = "serde_utils::hex_fixed")]
    altair_fork_version: B32,
    #[serde(with = "serde_utils::uint64_text")]
    altair_fork_epoch: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    bellatrix_fork_version: B32,
    #[serde(with = "serde_utils::uint64_text")]
    bellatrix_fork_epoch: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    capella_fork_version: B32,
    #[serde(with = "serde_utils::uint64_text")]
    capella_fork_epoch: u64,
    #[serde(with = "serde_utils::hex_fixed")]
    deneb_fork_version: B32,
    #[serde(with = "serde_utils::uint64_text")]
    deneb_fork_epoch: u64,
}

impl TryFrom<RawChainConfig> for ChainConfig {
    type Error = ChainConfigError;

    fn try_from(raw: RawChainConfig) -> Result<Self, Self::Error> {
        let preset = PresetValues::for_preset_base(&raw.preset_base);
        let preset_value = |value: Option<u64>,
                            field: &'static str,
                            pick: fn(&PresetValues) -> u64|
         -> Result<u64, ChainConfigError> {
            value
                .or_else(|| preset.as_ref().map(pick))
                .ok_or_else(|| ChainConfigError::MissingPresetValue {
                    field,
                    preset_base: raw.preset_base.clone(),
                })
        };

        let slots_per_epoch = preset_value(raw.slots_per_epoch, "SLOTS_PER_EPOCH", |preset| {
            preset.slots_per_epoch
        })?;
        let sync_committee_size =
            preset_value(raw.sync_committee_size, "SYNC_COMMITTEE_SIZE", |preset| {
                preset.sync_committee_size
            })?;
        let epochs_per_sync_committee_period = preset_value(
            raw.epochs_per_sync_committee_period,
            "EPOCHS_PER_SYNC_COMMITTEE_PERIOD",
            |preset| preset.epochs_per_sync_committee_period,
        )?;

        if slots_per_epoch == 0 {
            return Err(ChainConfigError::Zero("SLOTS_PER_EPOCH"));
        }
        if raw.seconds_per_slot == 0 {
            return Err(ChainConfigError::Zero("SECONDS_PER_SLOT"));
        }

        Ok(ChainConfig {
            config_name: raw.config_name.unwrap_or_else(|| raw.preset_base.clone()),
            preset_base: raw.preset_base,
            seconds_per_slot: raw.seconds_per_slot,
            slots_per_epoch,
            sync_committee_size,
            epochs_per_sync_committee_period,
            genesis_fork_version: raw.genesis_fork_version,
            altair_fork_version: raw.altair_fork_version,
            altair_fork_epoch: raw.altair_fork_epoch,
            bellatrix_fork_version: raw.bellatrix_fork_version,
            bellatrix_fork_epoch: raw.bellatrix_fork_epoch,
            capella_fork_version: raw.capella_fork_version,
            capella_fork_epoch: raw.capella_fork_epoch,
            deneb_fork_version: raw.deneb_fork_version,
            deneb_fork_epoch: raw.deneb_fork_epoch,
        })
    }
}

use std::slice::Iter;

use alloy_primitives::aliases::B32;
use explorer_consensus_beacon::fork::ForkName;
use serde::{Deserialize, Serialize};

/// Epoch used by configs for forks that are not scheduled.
pub const FAR_FUTURE_EPOCH: u64 = u64::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledFork {
    pub name: ForkName,
    pub version: B32,
    pub epoch: u64,
}

/// Every known fork with its activation epoch, in activation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkSchedule(pub [ScheduledFork; ForkSchedule::TOTAL]);

impl ForkSchedule {
    pub const TOTAL: usize = ForkName::ALL.len();

    pub const fn new(forks: [ScheduledFork; ForkSchedule::TOTAL]) -> Self {
        Self(forks)
    }

    pub fn iter(&self) -> Iter<'_, ScheduledFork> {
        self.0.iter()
    }

    pub fn scheduled(&self) -> impl Iterator<Item = &ScheduledFork> {
        self.iter().filter(|fork| fork.epoch != FAR_FUTURE_EPOCH)
    }

    /// The latest fork activated at or before `epoch`.
    pub fn fork_at_epoch(&self, epoch: u64) -> ForkName {
        self.scheduled()
            .filter(|fork| fork.epoch <= epoch)
            .map(|fork| fork.name)
            .max()
            .unwrap_or(ForkName::Phase0)
    }

    pub fn get(&self, name: ForkName) -> &ScheduledFork {
        &self.0[name as usize]
    }
}

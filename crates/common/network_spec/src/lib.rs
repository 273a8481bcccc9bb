#![warn(clippy::unwrap_used)]

pub mod chain_config;
pub mod fork_schedule;
pub mod networks;

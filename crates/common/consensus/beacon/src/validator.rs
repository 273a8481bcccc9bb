use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::bls::PublicKey;

/// One entry of `/eth/v1/beacon/states/{state_id}/validators`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorEntry {
    #[serde(with = "serde_utils::uint64_text")]
    pub index: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub balance: u64,
    pub status: ValidatorStatus,
    pub validator: Validator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    #[serde(with = "serde_utils::hex_fixed")]
    pub pubkey: PublicKey,
    #[serde(with = "serde_utils::hex_fixed")]
    pub withdrawal_credentials: B256,
    #[serde(with = "serde_utils::uint64_text")]
    pub effective_balance: u64,
    pub slashed: bool,
    #[serde(with = "serde_utils::uint64_text")]
    pub activation_eligibility_epoch: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub activation_epoch: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub exit_epoch: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub withdrawable_epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorStatus {
    PendingInitialized,
    PendingQueued,
    ActiveOngoing,
    ActiveExiting,
    ActiveSlashed,
    ExitedUnslashed,
    ExitedSlashed,
    WithdrawalPossible,
    WithdrawalDone,
    /// Any status string outside the standard set, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

impl ValidatorStatus {
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ValidatorStatus::ActiveOngoing
                | ValidatorStatus::ActiveExiting
                | ValidatorStatus::ActiveSlashed
        )
    }

    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            ValidatorStatus::PendingInitialized | ValidatorStatus::PendingQueued
        )
    }
}

/// One entry of `/eth/v1/beacon/states/{state_id}/validator_balances`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorBalance {
    #[serde(with = "serde_utils::uint64_text")]
    pub index: u64,
    #[serde(with = "serde_utils::uint64_text")]
    pub balance: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_validator_entry() -> Result<(), serde_json::Error> {
        let entry: ValidatorEntry = serde_json::from_value(json!({
            "index": "7",
            "balance": "32000000000",
            "status": "active_ongoing",
            "validator": {
                "pubkey": format!("0x{}", "a1".repeat(48)),
                "withdrawal_credentials": format!("0x01{}", "00".repeat(31)),
                "effective_balance": "32000000000",
                "slashed": false,
                "activation_eligibility_epoch": "0",
                "activation_epoch": "0",
                "exit_epoch": "18446744073709551615",
                "withdrawable_epoch": "18446744073709551615",
            },
        }))?;

        assert_eq!(entry.index, 7);
        assert_eq!(entry.balance, 32_000_000_000);
        assert!(entry.status.is_active());
        assert_eq!(entry.validator.exit_epoch, u64::MAX);
        assert_eq!(entry.validator.withdrawal_credentials[0], 0x01);
        Ok(())
    }

    #[test]
    fn unrecognised_status_is_kept_verbatim() -> Result<(), serde_json::Error> {
        let status: ValidatorStatus = serde_json::from_value(json!("active"))?;
        assert_eq!(status, ValidatorStatus::Other("active".to_string()));
        assert!(!status.is_active());
        assert_eq!(serde_json::to_value(&status)?, json!("active"));

        let known: ValidatorStatus = serde_json::from_value(json!("withdrawal_done"))?;
        assert_eq!(known, ValidatorStatus::WithdrawalDone);
        Ok(())
    }
}

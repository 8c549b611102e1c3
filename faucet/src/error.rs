//! Faucet-specific errors.

use ashc_ledger::LedgerError;
use ashc_types::AccountId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaucetError {
    #[error("caller {0} is not the faucet owner")]
    Unauthorized(AccountId),

    #[error("minting is disabled (mint amount is zero)")]
    MintingDisabled,

    #[error("mint cooldown active: {remaining_secs}s remaining")]
    CooldownActive { remaining_secs: u64 },

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

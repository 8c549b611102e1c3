//! Core faucet engine — authorization, cooldown gating, issuance.

use std::collections::HashMap;

use ashc_ledger::Ledger;
use ashc_types::{AccountId, FaucetParams, MintStatus, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::FaucetError;

/// The faucet engine — owns the issuance configuration and per-account
/// cooldown timestamps.
///
/// Every time-gated decision is made against an externally supplied `now`;
/// the engine never samples a clock. The cooldown is always evaluated with
/// the *current* `mint_delay_secs`, so reconfiguring the delay immediately
/// moves every in-progress wait, in either direction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FaucetEngine {
    owner: AccountId,
    mint_amount: u128,
    mint_delay_secs: u64,
    /// Timestamp of each account's most recent successful mint.
    /// Absent entry = never minted.
    last_mint_at: HashMap<AccountId, Timestamp>,
}

impl FaucetEngine {
    /// A faucet with default parameters (minting disabled, one-day delay).
    pub fn new(owner: AccountId) -> Self {
        Self::with_params(owner, FaucetParams::default())
    }

    /// A faucet with explicit parameters.
    pub fn with_params(owner: AccountId, params: FaucetParams) -> Self {
        Self {
            owner,
            mint_amount: params.mint_amount,
            mint_delay_secs: params.mint_delay_secs,
            last_mint_at: HashMap::new(),
        }
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn mint_amount(&self) -> u128 {
        self.mint_amount
    }

    pub fn mint_delay_secs(&self) -> u64 {
        self.mint_delay_secs
    }

    /// Timestamp of `account`'s most recent successful mint, if any.
    pub fn last_mint_at(&self, account: &AccountId) -> Option<Timestamp> {
        self.last_mint_at.get(account).copied()
    }

    /// Set the amount credited per mint. Owner only; 0 disables minting.
    pub fn set_mint_amount(&mut self, caller: &AccountId, amount: u128) -> Result<(), FaucetError> {
        self.ensure_owner(caller)?;
        self.mint_amount = amount;
        Ok(())
    }

    /// Set the minimum spacing between mints per account. Owner only.
    pub fn set_mint_delay(&mut self, caller: &AccountId, secs: u64) -> Result<(), FaucetError> {
        self.ensure_owner(caller)?;
        self.mint_delay_secs = secs;
        Ok(())
    }

    /// Self-service mint: credit `mint_amount` of new supply to `caller`.
    ///
    /// Gate order: the disabled check runs before the cooldown check, and
    /// the ledger credit runs before the cooldown timestamp is recorded —
    /// a failed credit leaves the faucet untouched. Returns the amount
    /// minted.
    pub fn mint(
        &mut self,
        ledger: &mut Ledger,
        caller: &AccountId,
        now: Timestamp,
    ) -> Result<u128, FaucetError> {
        if self.mint_amount == 0 {
            return Err(FaucetError::MintingDisabled);
        }
        if let Some(last) = self.last_mint_at.get(caller) {
            if !last.delay_elapsed(self.mint_delay_secs, now) {
                return Err(FaucetError::CooldownActive {
                    remaining_secs: last.remaining(self.mint_delay_secs, now),
                });
            }
        }
        ledger.credit_new_supply(caller, self.mint_amount)?;
        self.last_mint_at.insert(caller.clone(), now);
        Ok(self.mint_amount)
    }

    /// Where `account` stands in the mint state machine at `now`.
    pub fn mint_status(&self, account: &AccountId, now: Timestamp) -> MintStatus {
        match self.last_mint_at.get(account) {
            None => MintStatus::NeverMinted,
            Some(last) if last.delay_elapsed(self.mint_delay_secs, now) => MintStatus::Eligible,
            Some(last) => MintStatus::CoolingDown {
                eligible_at: last.plus(self.mint_delay_secs),
            },
        }
    }

    fn ensure_owner(&self, caller: &AccountId) -> Result<(), FaucetError> {
        if caller != &self.owner {
            return Err(FaucetError::Unauthorized(caller.clone()));
        }
        Ok(())
    }
}

//! Core balance and allowance bookkeeping.

use std::collections::HashMap;

use ashc_types::AccountId;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// The token ledger — total supply, per-account balances, and per-pair
/// allowances.
///
/// Absent entries read as zero; entries are zeroed on full spend, never
/// deleted. All mutating operations validate their preconditions before
/// touching any map, so an `Err` return implies zero state mutation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ledger {
    total_supply: u128,
    balances: HashMap<AccountId, u128>,
    /// owner → spender → remaining approved amount.
    allowances: HashMap<AccountId, HashMap<AccountId, u128>>,
}

impl Ledger {
    /// An empty ledger with zero supply.
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger with `supply` raw units credited to `holder`.
    pub fn with_initial_supply(holder: AccountId, supply: u128) -> Self {
        let mut balances = HashMap::new();
        balances.insert(holder, supply);
        Self {
            total_supply: supply,
            balances,
            allowances: HashMap::new(),
        }
    }

    /// Sum of all balances. Monotonically non-decreasing — there is no burn.
    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Balance of an account; zero for accounts the ledger has never seen.
    pub fn balance_of(&self, account: &AccountId) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Remaining amount `spender` may move out of `owner`'s balance.
    pub fn allowance_of(&self, owner: &AccountId, spender: &AccountId) -> u128 {
        self.allowances
            .get(owner)
            .and_then(|per_owner| per_owner.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// Move `amount` from `caller` to `to`.
    ///
    /// Zero amount is a legal no-op; a self-transfer nets to zero but still
    /// requires the balance precondition to hold.
    pub fn transfer(
        &mut self,
        caller: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(caller);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        self.move_balance(caller, to, amount);
        Ok(())
    }

    /// Set `spender`'s allowance over `caller`'s balance to exactly `amount`
    /// (overwrite, not additive). Setting 0 zeroes the entry.
    pub fn approve(&mut self, caller: &AccountId, spender: &AccountId, amount: u128) {
        self.allowances
            .entry(caller.clone())
            .or_default()
            .insert(spender.clone(), amount);
    }

    /// Move `amount` from `from` to `to` on behalf of `caller`, consuming
    /// `caller`'s allowance.
    ///
    /// The allowance is validated before the balance, and is decremented on
    /// every spend — a maximum-value allowance gets no exemption.
    pub fn transfer_from(
        &mut self,
        caller: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> Result<(), LedgerError> {
        let approved = self.allowance_of(from, caller);
        if approved < amount {
            return Err(LedgerError::InsufficientAllowance {
                needed: amount,
                approved,
            });
        }
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        if amount > 0 {
            if let Some(per_owner) = self.allowances.get_mut(from) {
                if let Some(remaining) = per_owner.get_mut(caller) {
                    *remaining -= amount;
                }
            }
        }
        self.move_balance(from, to, amount);
        Ok(())
    }

    /// Credit freshly issued supply to `to`.
    ///
    /// Internal primitive for the issuance layer — no authorization check
    /// here; the faucet gates who may call it and when.
    pub fn credit_new_supply(&mut self, to: &AccountId, amount: u128) -> Result<(), LedgerError> {
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        // Balance credit cannot overflow: every balance <= total_supply.
        *self.balances.entry(to.clone()).or_insert(0) += amount;
        Ok(())
    }

    /// Ledger summary statistics.
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            accounts: self.balances.len() as u64,
            total_supply: self.total_supply,
        }
    }

    /// Debit/credit helper shared by `transfer` and `transfer_from`.
    /// Callers have already validated the debit side.
    fn move_balance(&mut self, from: &AccountId, to: &AccountId, amount: u128) {
        if amount == 0 || from == to {
            // Net effect is zero; avoid materializing empty entries.
            return;
        }
        if let Some(balance) = self.balances.get_mut(from) {
            *balance -= amount;
        }
        // Credit cannot overflow: sum of balances == total_supply.
        *self.balances.entry(to.clone()).or_insert(0) += amount;
    }
}

/// Summary statistics for the ledger.
#[derive(Clone, Copy, Debug)]
pub struct LedgerSummary {
    pub accounts: u64,
    pub total_supply: u128,
}

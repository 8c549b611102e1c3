//! The token facade — one type owning the ledger and the faucet.

use ashc_faucet::FaucetEngine;
use ashc_ledger::{create_genesis_ledger, GenesisConfig, Ledger, LedgerSummary};
use ashc_types::{AccountId, MintStatus, Timestamp, TokenMetadata};

use crate::{TokenConfig, TokenError};

/// A complete token instance: descriptive metadata, the balance/allowance
/// ledger, and the issuance faucet.
///
/// Every mutation takes the authenticated caller identity as supplied by
/// the hosting environment; time-gated operations additionally take `now`.
/// Calls are atomic — an `Err` return means nothing changed.
pub struct Token {
    metadata: TokenMetadata,
    ledger: Ledger,
    faucet: FaucetEngine,
}

impl Token {
    /// The standard deployment: default metadata, the fixed initial supply
    /// credited to `owner`, minting disabled until the owner enables it.
    pub fn new(owner: AccountId) -> Self {
        let ledger = create_genesis_ledger(&GenesisConfig::for_holder(owner.clone()));
        Self {
            metadata: TokenMetadata::default(),
            ledger,
            faucet: FaucetEngine::new(owner),
        }
    }

    /// Construct from a [`TokenConfig`], crediting the initial supply to
    /// `owner` and seeding the faucet with the configured parameters.
    pub fn from_config(config: &TokenConfig, owner: AccountId) -> Self {
        let ledger = create_genesis_ledger(&GenesisConfig {
            initial_holder: owner.clone(),
            initial_supply: config.initial_supply_raw(),
        });
        Self {
            metadata: config.metadata(),
            ledger,
            faucet: FaucetEngine::with_params(owner, config.faucet_params()),
        }
    }

    // ── Metadata ───────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn owner(&self) -> &AccountId {
        self.faucet.owner()
    }

    // ── Reads ──────────────────────────────────────────────────────────

    pub fn total_supply(&self) -> u128 {
        self.ledger.total_supply()
    }

    pub fn balance_of(&self, account: &AccountId) -> u128 {
        self.ledger.balance_of(account)
    }

    pub fn allowance_of(&self, owner: &AccountId, spender: &AccountId) -> u128 {
        self.ledger.allowance_of(owner, spender)
    }

    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }

    pub fn mint_amount(&self) -> u128 {
        self.faucet.mint_amount()
    }

    pub fn mint_delay_secs(&self) -> u64 {
        self.faucet.mint_delay_secs()
    }

    pub fn mint_status(&self, account: &AccountId, now: Timestamp) -> MintStatus {
        self.faucet.mint_status(account, now)
    }

    // ── Mutations ──────────────────────────────────────────────────────

    pub fn transfer(
        &mut self,
        caller: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> Result<(), TokenError> {
        self.ledger.transfer(caller, to, amount)?;
        tracing::debug!(from = %caller, to = %to, amount, "transfer applied");
        Ok(())
    }

    pub fn approve(&mut self, caller: &AccountId, spender: &AccountId, amount: u128) {
        self.ledger.approve(caller, spender, amount);
        tracing::debug!(owner = %caller, spender = %spender, amount, "allowance set");
    }

    pub fn transfer_from(
        &mut self,
        caller: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> Result<(), TokenError> {
        self.ledger.transfer_from(caller, from, to, amount)?;
        tracing::debug!(spender = %caller, from = %from, to = %to, amount, "delegated transfer applied");
        Ok(())
    }

    /// Self-service faucet mint. Returns the amount credited.
    pub fn mint(&mut self, caller: &AccountId, now: Timestamp) -> Result<u128, TokenError> {
        let minted = self.faucet.mint(&mut self.ledger, caller, now)?;
        tracing::debug!(account = %caller, amount = minted, now = %now, "faucet mint");
        Ok(minted)
    }

    pub fn set_mint_amount(&mut self, caller: &AccountId, amount: u128) -> Result<(), TokenError> {
        self.faucet.set_mint_amount(caller, amount)?;
        tracing::info!(amount, "mint amount reconfigured");
        Ok(())
    }

    pub fn set_mint_delay(&mut self, caller: &AccountId, secs: u64) -> Result<(), TokenError> {
        self.faucet.set_mint_delay(caller, secs)?;
        tracing::info!(secs, "mint delay reconfigured");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account(name: &str) -> AccountId {
        AccountId::new(name)
    }

    #[test]
    fn new_token_has_default_metadata() {
        let token = Token::new(test_account("owner"));
        assert_eq!(token.name(), "AshishCoin");
        assert_eq!(token.symbol(), "ASC");
        assert_eq!(token.decimals(), 18);
        assert_eq!(token.owner(), &test_account("owner"));
    }

    #[test]
    fn from_config_applies_metadata_and_faucet_params() {
        let config = TokenConfig {
            name: "TestCoin".to_string(),
            symbol: "TST".to_string(),
            initial_supply: 7,
            mint_amount: 2,
            mint_delay_secs: 60,
            ..TokenConfig::default()
        };
        let owner = test_account("owner");
        let token = Token::from_config(&config, owner.clone());

        assert_eq!(token.name(), "TestCoin");
        assert_eq!(token.symbol(), "TST");
        assert_eq!(token.total_supply(), ashc_types::amount::from_whole(7));
        assert_eq!(token.balance_of(&owner), ashc_types::amount::from_whole(7));
        assert_eq!(token.mint_amount(), ashc_types::amount::from_whole(2));
        assert_eq!(token.mint_delay_secs(), 60);
    }

    #[test]
    fn errors_pass_through_the_facade() {
        let owner = test_account("owner");
        let other = test_account("other");
        let mut token = Token::new(owner);

        let result = token.transfer(&other, &test_account("x"), 1);
        assert!(matches!(
            result.unwrap_err(),
            TokenError::Ledger(ashc_ledger::LedgerError::InsufficientBalance { .. })
        ));

        let result = token.set_mint_amount(&other, 1);
        assert!(matches!(
            result.unwrap_err(),
            TokenError::Faucet(ashc_faucet::FaucetError::Unauthorized(_))
        ));
    }
}

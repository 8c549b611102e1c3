//! Genesis ledger construction.
//!
//! The entire fixed initial supply is credited to a single designated
//! holder at construction; everything after that moves through the
//! transfer/approve/mint operations.

use ashc_types::{AccountId, INITIAL_SUPPLY};

use crate::ledger::Ledger;

/// Configuration for constructing a genesis ledger.
#[derive(Clone, Debug)]
pub struct GenesisConfig {
    /// The account credited with the initial supply.
    pub initial_holder: AccountId,
    /// Initial supply in raw units.
    pub initial_supply: u128,
}

impl GenesisConfig {
    /// The standard deployment: `INITIAL_SUPPLY` credited to `holder`.
    pub fn for_holder(holder: AccountId) -> Self {
        Self {
            initial_holder: holder,
            initial_supply: INITIAL_SUPPLY,
        }
    }
}

/// Create a ledger in its genesis state.
pub fn create_genesis_ledger(config: &GenesisConfig) -> Ledger {
    Ledger::with_initial_supply(config.initial_holder.clone(), config.initial_supply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ashc_types::amount::UNIT;

    #[test]
    fn genesis_credits_full_supply_to_holder() {
        let holder = AccountId::new("deployer");
        let ledger = create_genesis_ledger(&GenesisConfig::for_holder(holder.clone()));

        assert_eq!(ledger.total_supply(), 10_000 * UNIT);
        assert_eq!(ledger.balance_of(&holder), 10_000 * UNIT);
        assert_eq!(ledger.summary().accounts, 1);
    }

    #[test]
    fn custom_supply_is_respected() {
        let holder = AccountId::new("deployer");
        let config = GenesisConfig {
            initial_holder: holder.clone(),
            initial_supply: 42,
        };
        let ledger = create_genesis_ledger(&config);

        assert_eq!(ledger.total_supply(), 42);
        assert_eq!(ledger.balance_of(&holder), 42);
    }

    #[test]
    fn unknown_accounts_read_zero() {
        let ledger = create_genesis_ledger(&GenesisConfig::for_holder(AccountId::new("deployer")));
        let stranger = AccountId::new("stranger");

        assert_eq!(ledger.balance_of(&stranger), 0);
        assert_eq!(ledger.allowance_of(&stranger, &AccountId::new("spender")), 0);
    }
}

//! Token metadata and faucet parameters.

use crate::amount::{from_whole, DECIMALS};
use serde::{Deserialize, Serialize};

/// The fixed initial supply: 10,000 whole tokens in raw units, credited to
/// the initial holder at construction.
pub const INITIAL_SUPPLY: u128 = 10_000 * crate::amount::UNIT;

/// Descriptive token metadata.
///
/// Not part of the accounting invariants — `decimals` documents the scaling
/// convention of all raw amounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: "AshishCoin".to_string(),
            symbol: "ASC".to_string(),
            decimals: DECIMALS,
        }
    }
}

/// Faucet issuance parameters, both reconfigurable by the owner at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaucetParams {
    /// Amount credited per successful mint, in raw units. 0 disables minting.
    pub mint_amount: u128,

    /// Minimum spacing in seconds between two mints by the same account.
    pub mint_delay_secs: u64,
}

impl Default for FaucetParams {
    fn default() -> Self {
        Self {
            // Minting starts disabled until the owner sets an amount.
            mint_amount: 0,
            mint_delay_secs: 24 * 3600,
        }
    }
}

impl FaucetParams {
    /// Parameters granting `whole` tokens per mint with the given spacing.
    pub fn per_mint(whole: u64, delay_secs: u64) -> Self {
        Self {
            mint_amount: from_whole(whole),
            mint_delay_secs: delay_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::UNIT;

    #[test]
    fn initial_supply_is_ten_thousand_whole_tokens() {
        assert_eq!(INITIAL_SUPPLY, 10_000 * UNIT);
    }

    #[test]
    fn default_metadata_matches_deployment() {
        let meta = TokenMetadata::default();
        assert_eq!(meta.name, "AshishCoin");
        assert_eq!(meta.symbol, "ASC");
        assert_eq!(meta.decimals, 18);
    }

    #[test]
    fn default_faucet_params_disable_minting() {
        let params = FaucetParams::default();
        assert_eq!(params.mint_amount, 0);
        assert_eq!(params.mint_delay_secs, 86_400);
    }

    #[test]
    fn per_mint_scales_whole_tokens() {
        let params = FaucetParams::per_mint(5, 3600);
        assert_eq!(params.mint_amount, 5 * UNIT);
        assert_eq!(params.mint_delay_secs, 3600);
    }
}

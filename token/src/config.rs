//! Token configuration with TOML file support.

use serde::{Deserialize, Serialize};

use ashc_types::amount::from_whole;
use ashc_types::{FaucetParams, TokenMetadata, DECIMALS};

use crate::TokenError;

/// Configuration for constructing a [`Token`](crate::Token).
///
/// Can be loaded from a TOML file via [`TokenConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Amounts are expressed in whole
/// tokens — TOML integers are i64, so raw 10^18-scaled values never appear
/// in config files; scaling happens at construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Token name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Token symbol.
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Initial supply in whole tokens, credited to the initial holder.
    #[serde(default = "default_initial_supply")]
    pub initial_supply: u64,

    /// Faucet grant per mint in whole tokens. 0 disables minting.
    #[serde(default)]
    pub mint_amount: u64,

    /// Minimum spacing in seconds between two mints by the same account.
    #[serde(default = "default_mint_delay_secs")]
    pub mint_delay_secs: u64,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_name() -> String {
    TokenMetadata::default().name
}

fn default_symbol() -> String {
    TokenMetadata::default().symbol
}

fn default_initial_supply() -> u64 {
    10_000
}

fn default_mint_delay_secs() -> u64 {
    FaucetParams::default().mint_delay_secs
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl TokenConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, TokenError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TokenError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, TokenError> {
        toml::from_str(s).map_err(|e| TokenError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("TokenConfig is always serializable to TOML")
    }

    /// Descriptive metadata for this configuration. Decimals are fixed —
    /// the 10^18 scaling convention is not configurable.
    pub fn metadata(&self) -> TokenMetadata {
        TokenMetadata {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: DECIMALS,
        }
    }

    /// Faucet parameters in raw units.
    pub fn faucet_params(&self) -> FaucetParams {
        FaucetParams::per_mint(self.mint_amount, self.mint_delay_secs)
    }

    /// Initial supply in raw units.
    pub fn initial_supply_raw(&self) -> u128 {
        from_whole(self.initial_supply)
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            symbol: default_symbol(),
            initial_supply: default_initial_supply(),
            mint_amount: 0,
            mint_delay_secs: default_mint_delay_secs(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

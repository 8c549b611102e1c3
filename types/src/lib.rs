//! Fundamental types for the AshishCoin ledger core.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: account identities, fixed-point amount helpers, timestamps,
//! token/faucet parameters, and the per-account mint state enum.

pub mod address;
pub mod amount;
pub mod params;
pub mod state;
pub mod time;

pub use address::AccountId;
pub use amount::{DECIMALS, UNIT};
pub use params::{FaucetParams, TokenMetadata, INITIAL_SUPPLY};
pub use state::MintStatus;
pub use time::Timestamp;

//! Owner-governed, time-gated issuance.
//!
//! The faucet gates self-service minting twice: by authorization for
//! configuration (only the owner may change the mint amount or delay) and
//! by time for issuance (each account must wait out the configured delay
//! between mints). Supply mutation itself is delegated to the ledger's
//! credit primitive — the faucet never touches balances directly.

pub mod engine;
pub mod error;

pub use engine::FaucetEngine;
pub use error::FaucetError;

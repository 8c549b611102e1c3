//! Account-balance ledger.
//!
//! Owns the supply and per-account balance/allowance bookkeeping. Every
//! mutation is atomic: preconditions are checked before any write, so a
//! failed call leaves the ledger untouched. The ledger has no notion of
//! authorization or time — those belong to the issuance layer above it.

pub mod error;
pub mod genesis;
pub mod ledger;

pub use error::LedgerError;
pub use genesis::{create_genesis_ledger, GenesisConfig};
pub use ledger::{Ledger, LedgerSummary};

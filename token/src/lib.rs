//! Unified token surface.
//!
//! Composes the ledger and the faucet into a single type exposing the
//! whole external operation set: metadata queries, balance/allowance
//! reads, transfers, approvals, delegated transfers, and the owner-gated
//! faucet operations. The hosting execution environment supplies caller
//! identities and timestamps and serializes calls; this crate adds
//! configuration loading and tracing on top of the engines.

pub mod config;
pub mod error;
pub mod logging;
pub mod token;

pub use config::TokenConfig;
pub use error::TokenError;
pub use token::Token;

//! Per-account mint state.

use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Where an account stands in the faucet's per-account state machine.
///
/// `NeverMinted → Eligible` is immediate (no prior timestamp to compare
/// against); a successful mint moves the account to `CoolingDown`, and the
/// configured delay elapsing moves it back to `Eligible`. There is no
/// terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MintStatus {
    /// The account has never minted; its first mint is always permitted.
    NeverMinted,
    /// The account minted recently and must wait until `eligible_at`.
    CoolingDown { eligible_at: Timestamp },
    /// The cooldown has elapsed; the next mint is permitted.
    Eligible,
}

impl MintStatus {
    /// Whether a mint request would pass the cooldown gate right now.
    pub fn can_mint(&self) -> bool {
        matches!(self, Self::NeverMinted | Self::Eligible)
    }
}

//! Timestamp type used by the issuance cooldown.
//!
//! Timestamps are Unix epoch seconds (UTC), always supplied by the hosting
//! environment — the core never samples a clock itself, so every time-gated
//! decision is deterministic and testable without real clocks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// The instant `delay_secs` after this one, saturating at the u64
    /// ceiling instead of wrapping.
    pub fn plus(&self, delay_secs: u64) -> Timestamp {
        Self(self.0.saturating_add(delay_secs))
    }

    /// Whether at least `delay_secs` have passed between this timestamp
    /// and `now`.
    ///
    /// Fails closed on a regressing clock: if `now` is earlier than this
    /// timestamp, nothing has elapsed.
    pub fn delay_elapsed(&self, delay_secs: u64, now: Timestamp) -> bool {
        now.0 >= self.0.saturating_add(delay_secs)
    }

    /// Seconds left until `delay_secs` have passed relative to `now`;
    /// zero once the delay has elapsed.
    pub fn remaining(&self, delay_secs: u64, now: Timestamp) -> u64 {
        self.0.saturating_add(delay_secs).saturating_sub(now.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

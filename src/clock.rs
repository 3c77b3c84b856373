//! Clock boundary for search time management.
//!
//! The searcher never reads the system time directly; it polls a [`Clock`]
//! once per move tried. [`TurnTimer`] is the wall-clock implementation.

use std::time::{Duration, Instant};

/// Default share of the remaining time one decision may use (1/30).
pub const DEFAULT_TIME_DIVISOR: u64 = 30;

/// Time source consulted by the searcher, in milliseconds.
pub trait Clock {
    /// Time spent on the current decision.
    fn elapsed_ms(&self) -> u64;

    /// Total time left on the player's clock.
    fn remaining_ms(&self) -> u64;

    /// True once this turn has used `1 / divisor` of the remaining time.
    #[inline]
    fn budget_exhausted(&self, divisor: u64) -> bool {
        self.elapsed_ms() >= self.remaining_ms() / divisor.max(1)
    }
}

/// Wall-clock timer for one decision.
///
/// The remaining time shrinks while the decision runs, the same way a game
/// clock ticks down while the side to move is thinking.
#[derive(Debug, Clone, Copy)]
pub struct TurnTimer {
    start: Instant,
    /// `None` means no time limit.
    remaining_at_start: Option<u64>,
}

impl TurnTimer {
    /// Start a timer for a player with `remaining_ms` left on the clock.
    #[must_use]
    pub fn new(remaining_ms: u64) -> Self {
        TurnTimer {
            start: Instant::now(),
            remaining_at_start: Some(remaining_ms),
        }
    }

    /// Start a timer from a `Duration` of remaining clock time.
    #[must_use]
    pub fn from_remaining(remaining: Duration) -> Self {
        Self::new(remaining.as_millis() as u64)
    }

    /// A timer that never runs out, for depth-limited analysis.
    #[must_use]
    pub fn unlimited() -> Self {
        TurnTimer {
            start: Instant::now(),
            remaining_at_start: None,
        }
    }
}

impl Clock for TurnTimer {
    #[inline]
    fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    #[inline]
    fn remaining_ms(&self) -> u64 {
        match self.remaining_at_start {
            Some(total) => total.saturating_sub(self.elapsed_ms()),
            None => u64::MAX,
        }
    }
}

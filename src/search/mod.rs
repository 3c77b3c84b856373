//! Move search.
//!
//! - [`negamax`]: alpha-beta negamax with quiescence and cache cutoffs
//! - [`move_order`]: cached-move / MVV-LVA move ordering
//! - [`iterative`]: iterative deepening under a time budget

pub mod constants;
pub mod iterative;
pub mod move_order;
pub mod negamax;

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_TIME_DIVISOR;
use crate::tt::PositionCache;

pub use constants::{DRAW_SCORE, INFINITY, MATE_SCORE, MATE_THRESHOLD, MAX_DEPTH};
pub use iterative::{choose_move, mate_in, search_with_outcome};
pub use negamax::{SearchStats, Searcher, TimedOut};

/// Default position cache size in MB
pub const DEFAULT_CACHE_MB: usize = 16;

/// Tunable limits of one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Deepest iteration to start (clamped to 1..=64)
    pub max_depth: u32,
    /// Position cache size in MB
    pub cache_mb: usize,
    /// A decision may use `1 / time_divisor` of the remaining clock
    pub time_divisor: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: MAX_DEPTH,
            cache_mb: DEFAULT_CACHE_MB,
            time_divisor: DEFAULT_TIME_DIVISOR,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_cache_mb(mut self, mb: usize) -> Self {
        self.cache_mb = mb;
        self
    }

    #[must_use]
    pub fn with_time_divisor(mut self, divisor: u64) -> Self {
        self.time_divisor = divisor;
        self
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IterationInfo {
    pub depth: u32,
    pub score: i32,
    /// Nodes searched so far in this decision
    pub nodes: u64,
    pub time_ms: u64,
    /// Moves to mate when the score is a mate score
    pub mate_in: Option<i32>,
    /// Best root move so far in long algebraic notation
    pub best_move: String,
}

/// Callback type for per-iteration search info.
pub type SearchInfoCallback = Arc<dyn Fn(&IterationInfo) + Send + Sync>;

/// Result of one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub best_move: M,
    /// Score of the deepest completed iteration, side-relative. After an
    /// interrupted pass this need not be the score of `best_move`.
    pub score: Option<i32>,
    /// Score `best_move` earned in the pass that chose it, a lower bound
    /// when that pass was interrupted. `None` if no search chose it.
    pub move_score: Option<i32>,
    /// Deepest completed iteration, 0 if none finished
    pub depth: u32,
    pub nodes: u64,
    /// The time budget stopped the search before the depth ceiling
    pub timed_out: bool,
    /// No root move was searched and the first legal move was returned
    pub fallback: bool,
}

/// Search state that outlives a single decision: the position cache and
/// the configuration.
pub struct SearchState<M> {
    pub cache: PositionCache<M>,
    pub config: SearchConfig,
    info_callback: Option<SearchInfoCallback>,
}

impl<M: Copy> SearchState<M> {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        SearchState {
            cache: PositionCache::new(config.cache_mb),
            config,
            info_callback: None,
        }
    }

    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }

    /// Forget every cached result, e.g. before a new game.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl<M: Copy> Default for SearchState<M> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<M: Copy> fmt::Debug for SearchState<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchState")
            .field("config", &self.config)
            .field("cache_slots", &self.cache.capacity())
            .field("info_callback", &self.info_callback.is_some())
            .finish()
    }
}

//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Bound wider than any evaluation. The root window is `[-INFINITY, INFINITY]`.
pub const INFINITY: i32 = 30_000;

/// Being checkmated at ply `p` scores `-MATE_SCORE + p`.
pub const MATE_SCORE: i32 = 30_000;

/// Scores with absolute value >= this are forced mates.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

/// Score of a repeated position or a stalemate.
pub const DRAW_SCORE: i32 = 0;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Hard ceiling for iterative deepening.
pub const MAX_DEPTH: u32 = 64;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================

/// Best move remembered by the position cache, always tried first.
pub const CACHE_MOVE_SCORE: i32 = 1_000_000;

/// Captures score `VICTIM_MULTIPLIER * victim tier - attacker tier`.
pub const VICTIM_MULTIPLIER: i32 = 100;

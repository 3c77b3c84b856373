//! Negamax alpha-beta search with quiescence and a transposition cache.
//!
//! One recursive routine covers both the full-width part of the tree
//! (`depth > 0`) and the capture-only quiescence extension (`depth <= 0`).

use super::constants::{DRAW_SCORE, INFINITY, MATE_SCORE};
use super::move_order::MovePicker;
use crate::clock::{Clock, DEFAULT_TIME_DIVISOR};
use crate::eval::evaluate;
use crate::position::Position;
use crate::tt::{Bound, PositionCache};

/// The time budget ran out before the node finished.
///
/// Carried up the recursion in the `Err` variant; nothing computed after
/// the budget ran out is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedOut;

/// Counters for one search episode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Full-width nodes expanded
    pub nodes: u64,
    /// Quiescence nodes expanded
    pub qnodes: u64,
    /// Nodes answered straight from the position cache
    pub cache_cutoffs: u64,
}

impl SearchStats {
    #[must_use]
    pub fn total_nodes(&self) -> u64 {
        self.nodes + self.qnodes
    }
}

/// State of one search episode: the board being searched, the cache it
/// reads and writes, the clock it polls and the best root move so far.
pub struct Searcher<'a, P: Position, C: Clock> {
    board: &'a mut P,
    cache: &'a mut PositionCache<P::Move>,
    clock: &'a C,
    time_divisor: u64,
    root_best: Option<P::Move>,
    /// Score `root_best` earned when it was recorded
    root_score: Option<i32>,
    stats: SearchStats,
}

impl<'a, P: Position, C: Clock> Searcher<'a, P, C> {
    pub fn new(board: &'a mut P, cache: &'a mut PositionCache<P::Move>, clock: &'a C) -> Self {
        Searcher {
            board,
            cache,
            clock,
            time_divisor: DEFAULT_TIME_DIVISOR,
            root_best: None,
            root_score: None,
            stats: SearchStats::default(),
        }
    }

    /// Use `1 / divisor` of the remaining clock time instead of 1/30.
    #[must_use]
    pub fn with_time_divisor(mut self, divisor: u64) -> Self {
        self.time_divisor = divisor;
        self
    }

    /// Best move found at ply 0 so far, including by an unfinished pass.
    #[must_use]
    pub fn root_best_move(&self) -> Option<P::Move> {
        self.root_best
    }

    /// Score of [`root_best_move`](Self::root_best_move) in the pass that
    /// recorded it. From an interrupted pass it is a lower bound.
    #[must_use]
    pub fn root_best_score(&self) -> Option<i32> {
        self.root_score
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub(crate) fn out_of_time(&self) -> bool {
        self.clock.budget_exhausted(self.time_divisor)
    }

    /// Run `f` with `mv` applied, reverting it whatever `f` returns.
    fn with_move<T>(&mut self, mv: P::Move, f: impl FnOnce(&mut Self) -> T) -> T {
        self.board.make_move(mv);
        let out = f(self);
        self.board.undo_move();
        out
    }

    /// Score of the current position for the side to move, searched
    /// `depth` plies deep (captures only once `depth <= 0`).
    ///
    /// `ply` is the distance from the root; at ply 0 every new best move is
    /// recorded in the root register as soon as it is found.
    pub fn search(&mut self, mut alpha: i32, beta: i32, depth: i32, ply: i32) -> Result<i32, TimedOut> {
        let is_root = ply == 0;

        if !is_root && self.board.is_repetition() {
            return Ok(DRAW_SCORE);
        }

        let key = self.board.key();
        let entry = self.cache.probe(key).copied();
        if let Some(entry) = entry {
            // The root always searches so the root register gets filled.
            if !is_root && entry.cuts_off(depth, alpha, beta) {
                self.stats.cache_cutoffs += 1;
                return Ok(entry.score);
            }
        }
        let cache_move = entry.and_then(|e| e.best_move);

        let quiescence = depth <= 0;
        let original_alpha = alpha;
        let mut best_score = -INFINITY;
        let mut best_move = None;

        if quiescence {
            self.stats.qnodes += 1;
            // Stand pat: the side to move may decline every capture.
            best_score = evaluate(&*self.board);
            if best_score >= beta {
                return Ok(best_score);
            }
            alpha = alpha.max(best_score);
        } else {
            self.stats.nodes += 1;
        }

        let moves = self.board.legal_moves(quiescence);
        if moves.is_empty() && !quiescence {
            return Ok(if self.board.in_check() {
                -MATE_SCORE + ply
            } else {
                DRAW_SCORE
            });
        }

        let mut picker = MovePicker::new(&*self.board, moves, cache_move);
        while let Some(mv) = picker.pick_next() {
            if self.out_of_time() {
                return Err(TimedOut);
            }

            let score = -self.with_move(mv, |s| s.search(-beta, -alpha, depth - 1, ply + 1))?;

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
                if is_root {
                    self.root_best = Some(mv);
                    self.root_score = Some(score);
                }
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
        }

        let bound = if best_score >= beta {
            Bound::LowerBound
        } else if best_score > original_alpha {
            Bound::Exact
        } else {
            Bound::UpperBound
        };
        self.cache.store(key, best_move, depth, best_score, bound);

        Ok(best_score)
    }
}

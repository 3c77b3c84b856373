//! Tapered piece-square evaluation.
//!
//! Each piece contributes a midgame and an endgame value (material plus
//! placement). The two totals are blended by a game-phase counter that
//! starts at 24 with all minor and major pieces on the board and falls to 0
//! when only kings and pawns remain.

mod tables;

use once_cell::sync::Lazy;

use crate::position::Position;
use crate::types::PieceKind;

pub use tables::{MAX_PHASE, PHASE_WEIGHT};
use tables::{MATERIAL_EG, MATERIAL_MG, PST_EG, PST_MG};

type ColorTable = [[[i32; 64]; 6]; 2];

/// Material folded into the piece-square tables, indexed
/// `[white = 0 / black = 1][piece][square]`. Black reads the rank-mirrored square.
struct PieceSquareTables {
    mg: ColorTable,
    eg: ColorTable,
}

static TABLES: Lazy<PieceSquareTables> = Lazy::new(|| {
    let mut mg = [[[0; 64]; 6]; 2];
    let mut eg = [[[0; 64]; 6]; 2];
    for piece in 0..6 {
        for sq in 0..64 {
            mg[0][piece][sq] = MATERIAL_MG[piece] + PST_MG[piece][sq];
            eg[0][piece][sq] = MATERIAL_EG[piece] + PST_EG[piece][sq];
            mg[1][piece][sq] = MATERIAL_MG[piece] + PST_MG[piece][sq ^ 56];
            eg[1][piece][sq] = MATERIAL_EG[piece] + PST_EG[piece][sq ^ 56];
        }
    }
    PieceSquareTables { mg, eg }
});

/// Raw accumulators of one evaluation, white positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalTerms {
    pub midgame: i32,
    pub endgame: i32,
    /// Game phase, 0 (pawn endgame) ..= 24 (all pieces).
    pub phase: i32,
}

impl EvalTerms {
    /// Linear blend of the midgame and endgame totals by phase.
    #[must_use]
    pub fn tapered(&self) -> i32 {
        (self.midgame * self.phase + self.endgame * (MAX_PHASE - self.phase)) / MAX_PHASE
    }
}

/// Accumulate material, placement and phase for both sides.
pub fn evaluate_terms<P: Position + ?Sized>(pos: &P) -> EvalTerms {
    let tables = &*TABLES;
    let mut terms = EvalTerms::default();

    for (side, white) in [(0usize, true), (1usize, false)] {
        let sign = if white { 1 } else { -1 };
        for kind in PieceKind::ALL {
            let piece = kind.index();
            let mut squares = pos.pieces(kind, white);
            while let Some(sq) = squares.pop_lowest() {
                terms.phase += PHASE_WEIGHT[piece];
                terms.midgame += sign * tables.mg[side][piece][sq];
                terms.endgame += sign * tables.eg[side][piece][sq];
            }
        }
    }

    // Promotions can push the counter past a full board.
    terms.phase = terms.phase.min(MAX_PHASE);
    terms
}

/// Static evaluation in centipawns, positive when the side to move is better.
pub fn evaluate<P: Position + ?Sized>(pos: &P) -> i32 {
    let score = evaluate_terms(pos).tapered();
    if pos.white_to_move() {
        score
    } else {
        -score
    }
}

//! Small value types shared by the evaluator, the searcher and the
//! rules-engine adapter.

/// Piece types, in ascending value order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Zero-based table index (pawn = 0, king = 5).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Value tier used by MVV-LVA ordering (pawn = 1, king = 6).
    #[inline]
    #[must_use]
    pub const fn tier(self) -> i32 {
        self.index() as i32 + 1
    }
}

/// Set of occupied squares, bit `n` set for square `n` (a1 = 0, h8 = 63).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SquareSet(pub u64);

impl SquareSet {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, square: usize) -> bool {
        square < 64 && self.0 & (1u64 << square) != 0
    }

    /// Remove the lowest-indexed square and return its index.
    #[inline]
    pub fn pop_lowest(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(idx)
    }
}

impl Iterator for SquareSet {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lowest()
    }
}
